//! storage::traits
//!
//! Movie storage trait definition.
//!
//! # Design
//!
//! `MovieStorage` is the persistence boundary of the catalog. Callers see
//! four operations over the whole collection; how the collection is loaded
//! and saved stays private to each implementation.
//!
//! Mutations report "nothing to do" as `Ok(false)` rather than an error:
//! a duplicate title on add, or a missing title on delete/update, is an
//! expected outcome the dispatcher turns into a user message. `Err` is
//! reserved for the backing store itself failing.
//!
//! # Example
//!
//! ```
//! use moviedb::core::types::Year;
//! use moviedb::storage::{MemoryStorage, MovieStorage};
//!
//! let storage = MemoryStorage::new();
//! assert!(storage.add_movie("Up", Year::Number(2009), 8.3, None).unwrap());
//! assert!(!storage.add_movie("Up", Year::Number(2020), 9.0, None).unwrap());
//!
//! assert!(storage.update_movie("Up", 8.5).unwrap());
//! assert_eq!(storage.list_movies().unwrap()["Up"].rating, 8.5);
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::{MovieCollection, Year};

/// Errors from movie storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file exists but could not be read.
    #[error("failed to read movie file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The backing file could not be written.
    #[error("failed to write movie file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The backing file is not a valid movie document.
    #[error("cannot parse movie file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// The collection could not be encoded.
    #[error("cannot serialize movies: {0}")]
    Serialize(String),

    /// No storage provider with this name.
    #[error("unknown storage provider: '{0}' (valid: json, toml, memory)")]
    UnknownProvider(String),
}

/// Trait for movie storage backends.
///
/// Every call works on a fresh load of the full collection. Mutating calls
/// load, edit in memory, and save the whole collection back before
/// returning.
pub trait MovieStorage: Send + Sync {
    /// Get every movie in the catalog.
    ///
    /// Returns an empty collection if nothing has been stored yet.
    fn list_movies(&self) -> Result<MovieCollection, StorageError>;

    /// Add a movie.
    ///
    /// Returns `Ok(false)` without changing anything if `title` is already
    /// present. Rating range and year format are not checked.
    fn add_movie(
        &self,
        title: &str,
        year: Year,
        rating: f64,
        poster: Option<String>,
    ) -> Result<bool, StorageError>;

    /// Delete a movie by title.
    ///
    /// Returns `Ok(false)` if `title` is not present.
    fn delete_movie(&self, title: &str) -> Result<bool, StorageError>;

    /// Replace the rating of a movie, keeping its other fields.
    ///
    /// Returns `Ok(false)` if `title` is not present.
    fn update_movie(&self, title: &str, rating: f64) -> Result<bool, StorageError>;

    /// Check if a title is in the catalog.
    ///
    /// Default implementation uses `list_movies()`.
    fn contains(&self, title: &str) -> Result<bool, StorageError> {
        Ok(self.list_movies()?.contains_key(title))
    }
}
