//! core::types
//!
//! Domain types for the movie catalog.
//!
//! # Types
//!
//! - [`Movie`] - One catalog entry (year, rating, optional poster)
//! - [`Year`] - Release year as written by the user
//! - [`MovieCollection`] - All movies keyed by title
//!
//! # Examples
//!
//! ```
//! use moviedb::core::types::{Movie, MovieCollection, Year};
//!
//! let mut movies = MovieCollection::new();
//! movies.insert("Inception".to_string(), Movie::new(Year::from("2010"), 8.8, None));
//!
//! assert_eq!(movies["Inception"].year, Year::Number(2010));
//! assert_eq!(movies["Inception"].to_string(), "2010: 8.8");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// All movies in the catalog, keyed by title.
///
/// Titles are unique. Iteration order is alphabetical by title.
pub type MovieCollection = BTreeMap<String, Movie>;

/// Release year of a movie.
///
/// The year is display-only and never validated. Numeric input is kept as a
/// number so the persisted document stays readable; anything else is stored
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl From<&str> for Year {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Year::Number(n),
            Err(_) => Year::Text(trimmed.to_string()),
        }
    }
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Year::Number(value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single catalog entry.
///
/// The title is not part of the record; it is the key in
/// [`MovieCollection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Release year
    pub year: Year,

    /// Rating, expected in 0..=10 but not enforced
    pub rating: f64,

    /// Poster image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl Movie {
    /// Create a new movie record.
    pub fn new(year: Year, rating: f64, poster: Option<String>) -> Self {
        Self {
            year,
            rating,
            poster,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.year, self.rating)
    }
}
