//! core::query
//!
//! Read-only views over a [`MovieCollection`].
//!
//! # Operations
//!
//! - [`Stats::compute`] - Average, median, best and worst movies
//! - [`search`] - Case-insensitive substring match on titles
//! - [`sorted_by_rating`] - All movies, highest rating first
//! - [`pick_random`] - One uniformly random movie
//!
//! None of these touch storage. The dispatcher loads the collection and
//! hands it here, which keeps the policies testable without console I/O.

use rand::seq::IteratorRandom;
use rand::Rng;

use super::types::{Movie, MovieCollection};

/// Relative tolerance used when matching ratings against the max/min.
const RATING_TOLERANCE: f64 = 1e-9;

/// Summary statistics over a non-empty collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Arithmetic mean of all ratings
    pub average: f64,
    /// Median rating; mean of the two middle values for even counts
    pub median: f64,
    /// Highest rating
    pub best_rating: f64,
    /// Every title rated `best_rating`, in title order
    pub best: Vec<String>,
    /// Lowest rating
    pub worst_rating: f64,
    /// Every title rated `worst_rating`, in title order
    pub worst: Vec<String>,
}

impl Stats {
    /// Compute statistics for a collection.
    ///
    /// Returns `None` for an empty collection.
    pub fn compute(movies: &MovieCollection) -> Option<Self> {
        if movies.is_empty() {
            return None;
        }

        let mut ratings: Vec<f64> = movies.values().map(|m| m.rating).collect();
        ratings.sort_by(f64::total_cmp);

        let count = ratings.len();
        let average = ratings.iter().sum::<f64>() / count as f64;
        let median = if count % 2 == 1 {
            ratings[count / 2]
        } else {
            (ratings[count / 2 - 1] + ratings[count / 2]) / 2.0
        };

        let worst_rating = ratings[0];
        let best_rating = ratings[count - 1];

        Some(Self {
            average,
            median,
            best_rating,
            best: titles_rated(movies, best_rating),
            worst_rating,
            worst: titles_rated(movies, worst_rating),
        })
    }
}

fn titles_rated(movies: &MovieCollection, rating: f64) -> Vec<String> {
    movies
        .iter()
        .filter(|(_, movie)| ratings_match(movie.rating, rating))
        .map(|(title, _)| title.clone())
        .collect()
}

/// Compare two ratings with a relative tolerance.
fn ratings_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= RATING_TOLERANCE * a.abs().max(b.abs())
}

/// Find every movie whose title contains `query`, ignoring case.
///
/// An empty query matches every title.
pub fn search<'a>(movies: &'a MovieCollection, query: &str) -> Vec<(&'a str, &'a Movie)> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|(title, _)| title.to_lowercase().contains(&needle))
        .map(|(title, movie)| (title.as_str(), movie))
        .collect()
}

/// All movies ordered by descending rating.
///
/// The sort is stable, so equal ratings stay in title order.
pub fn sorted_by_rating(movies: &MovieCollection) -> Vec<(&str, &Movie)> {
    let mut entries: Vec<(&str, &Movie)> = movies
        .iter()
        .map(|(title, movie)| (title.as_str(), movie))
        .collect();
    entries.sort_by(|a, b| b.1.rating.total_cmp(&a.1.rating));
    entries
}

/// Pick one movie uniformly at random.
///
/// Returns `None` for an empty collection.
pub fn pick_random<'a, R: Rng + ?Sized>(
    movies: &'a MovieCollection,
    rng: &mut R,
) -> Option<(&'a str, &'a Movie)> {
    movies
        .iter()
        .choose(rng)
        .map(|(title, movie)| (title.as_str(), movie))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Year;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn collection(entries: &[(&str, f64)]) -> MovieCollection {
        entries
            .iter()
            .map(|(title, rating)| {
                (
                    title.to_string(),
                    Movie::new(Year::Number(2000), *rating, None),
                )
            })
            .collect()
    }

    mod stats {
        use super::*;

        #[test]
        fn empty_collection_has_no_stats() {
            assert!(Stats::compute(&MovieCollection::new()).is_none());
        }

        #[test]
        fn single_movie() {
            let stats = Stats::compute(&collection(&[("Up", 8.3)])).unwrap();
            assert_eq!(stats.average, 8.3);
            assert_eq!(stats.median, 8.3);
            assert_eq!(stats.best, vec!["Up"]);
            assert_eq!(stats.worst, vec!["Up"]);
        }

        #[test]
        fn odd_count_median_is_middle_value() {
            let movies = collection(&[("A", 9.0), ("B", 1.0), ("C", 5.0)]);
            let stats = Stats::compute(&movies).unwrap();
            assert_eq!(stats.median, 5.0);
            assert_eq!(stats.average, 5.0);
        }

        #[test]
        fn even_count_median_averages_middle_values() {
            let movies = collection(&[("A", 8.8), ("B", 8.3), ("C", 8.0), ("D", 7.0)]);
            let stats = Stats::compute(&movies).unwrap();
            assert!((stats.median - 8.15).abs() < 1e-9);
        }

        #[test]
        fn ties_are_all_reported() {
            let movies = collection(&[("Alien", 8.5), ("Heat", 8.5), ("Cats", 2.0), ("Jaws", 7.0)]);
            let stats = Stats::compute(&movies).unwrap();
            assert_eq!(stats.best, vec!["Alien", "Heat"]);
            assert_eq!(stats.best_rating, 8.5);
            assert_eq!(stats.worst, vec!["Cats"]);
            assert_eq!(stats.worst_rating, 2.0);
        }

        #[test]
        fn tolerance_absorbs_float_noise() {
            let movies = collection(&[("A", 0.1 + 0.2), ("B", 0.3)]);
            let stats = Stats::compute(&movies).unwrap();
            assert_eq!(stats.best.len(), 2);
            assert_eq!(stats.worst.len(), 2);
        }

        #[test]
        fn zero_ratings_tie() {
            let movies = collection(&[("A", 0.0), ("B", 0.0)]);
            let stats = Stats::compute(&movies).unwrap();
            assert_eq!(stats.worst, vec!["A", "B"]);
        }
    }

    mod search {
        use super::*;

        #[test]
        fn case_insensitive_substring() {
            let movies = collection(&[("The Matrix", 8.7), ("Up", 8.3)]);
            let found = search(&movies, "MAT");
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].0, "The Matrix");
        }

        #[test]
        fn no_match_is_empty() {
            let movies = collection(&[("The Matrix", 8.7)]);
            assert!(search(&movies, "godfather").is_empty());
        }

        #[test]
        fn multiple_matches_in_title_order() {
            let movies = collection(&[("Toy Story 2", 7.9), ("Toy Story", 8.3), ("Up", 8.3)]);
            let titles: Vec<_> = search(&movies, "toy").into_iter().map(|(t, _)| t).collect();
            assert_eq!(titles, vec!["Toy Story", "Toy Story 2"]);
        }
    }

    mod sorting {
        use super::*;

        #[test]
        fn descending_by_rating() {
            let movies = collection(&[("Her", 8.0), ("Inception", 8.8), ("Up", 8.3)]);
            let titles: Vec<_> = sorted_by_rating(&movies)
                .into_iter()
                .map(|(t, _)| t)
                .collect();
            assert_eq!(titles, vec!["Inception", "Up", "Her"]);
        }

        #[test]
        fn ties_keep_title_order() {
            let movies = collection(&[("B", 5.0), ("A", 5.0), ("C", 9.0)]);
            let titles: Vec<_> = sorted_by_rating(&movies)
                .into_iter()
                .map(|(t, _)| t)
                .collect();
            assert_eq!(titles, vec!["C", "A", "B"]);
        }
    }

    mod random {
        use super::*;

        #[test]
        fn empty_collection_yields_none() {
            let mut rng = StdRng::seed_from_u64(7);
            assert!(pick_random(&MovieCollection::new(), &mut rng).is_none());
        }

        #[test]
        fn picks_a_member() {
            let movies = collection(&[("Her", 8.0), ("Inception", 8.8), ("Up", 8.3)]);
            let mut rng = StdRng::seed_from_u64(42);
            for _ in 0..20 {
                let (title, _) = pick_random(&movies, &mut rng).unwrap();
                assert!(movies.contains_key(title));
            }
        }

        #[test]
        fn every_member_is_reachable() {
            let movies = collection(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
            let mut rng = StdRng::seed_from_u64(1);
            let mut seen = std::collections::BTreeSet::new();
            for _ in 0..200 {
                seen.insert(pick_random(&movies, &mut rng).unwrap().0);
            }
            assert_eq!(seen.len(), 3);
        }
    }
}
