//! storage::memory
//!
//! In-memory movie storage.
//!
//! # Design
//!
//! Holds the catalog in a `Mutex` so the store stays `Send + Sync` like the
//! file-backed one. Nothing survives the process; this backs the `memory`
//! provider and the dispatcher tests.

use std::sync::{Mutex, MutexGuard};

use super::traits::{MovieStorage, StorageError};
use crate::core::types::{Movie, MovieCollection, Year};

/// In-memory movie storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    movies: Mutex<MovieCollection>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `movies`.
    pub fn with_movies(movies: MovieCollection) -> Self {
        Self {
            movies: Mutex::new(movies),
        }
    }

    fn movies(&self) -> MutexGuard<'_, MovieCollection> {
        // Every mutation is a single map call, so a poisoned map is still whole.
        self.movies.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MovieStorage for MemoryStorage {
    fn list_movies(&self) -> Result<MovieCollection, StorageError> {
        Ok(self.movies().clone())
    }

    fn add_movie(
        &self,
        title: &str,
        year: Year,
        rating: f64,
        poster: Option<String>,
    ) -> Result<bool, StorageError> {
        let mut movies = self.movies();
        if movies.contains_key(title) {
            return Ok(false);
        }
        movies.insert(title.to_string(), Movie::new(year, rating, poster));
        Ok(true)
    }

    fn delete_movie(&self, title: &str) -> Result<bool, StorageError> {
        Ok(self.movies().remove(title).is_some())
    }

    fn update_movie(&self, title: &str, rating: f64) -> Result<bool, StorageError> {
        match self.movies().get_mut(title) {
            Some(movie) => {
                movie.rating = rating;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
