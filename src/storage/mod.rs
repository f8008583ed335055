//! storage
//!
//! Persistence boundary for the movie catalog.
//!
//! # Architecture
//!
//! The catalog is stored through the [`MovieStorage`] trait, which has
//! these implementations:
//!
//! - [`FileStorage`]: one JSON or TOML document on disk (default)
//! - [`MemoryStorage`]: process-local, nothing persisted
//!
//! # Provider Selection
//!
//! Use [`create_storage`] to build a store from configuration:
//!
//! ```
//! use moviedb::storage::{create_storage, MovieStorage};
//! use std::path::Path;
//!
//! let store = create_storage("memory", Path::new("unused.json")).unwrap();
//! assert!(store.list_movies().unwrap().is_empty());
//!
//! assert!(create_storage("sqlite", Path::new("movies.db")).is_err());
//! ```

mod file_store;
mod memory;
mod traits;

use std::path::Path;

pub use file_store::{FileStorage, StorageFormat};
pub use memory::MemoryStorage;
pub use traits::{MovieStorage, StorageError};

/// The default storage provider name.
pub const DEFAULT_PROVIDER: &str = "json";

/// The default movie file, relative to the working directory.
pub const DEFAULT_PATH: &str = "movies.json";

/// Names accepted by [`create_storage`].
pub fn valid_provider_names() -> &'static [&'static str] {
    &["json", "toml", "memory"]
}

/// Pick the provider implied by a file's extension.
pub fn provider_for_path(path: &Path) -> &'static str {
    match StorageFormat::from_path(path) {
        StorageFormat::Json => "json",
        StorageFormat::Toml => "toml",
    }
}

/// Create a movie store based on the provider name.
///
/// # Providers
///
/// - `"json"`: [`FileStorage`] writing JSON to `path`
/// - `"toml"`: [`FileStorage`] writing TOML to `path`
/// - `"memory"`: [`MemoryStorage`]; `path` is ignored
///
/// # Errors
///
/// Returns [`StorageError::UnknownProvider`] for any other name.
pub fn create_storage(provider: &str, path: &Path) -> Result<Box<dyn MovieStorage>, StorageError> {
    match provider {
        "json" => Ok(Box::new(FileStorage::with_format(path, StorageFormat::Json))),
        "toml" => Ok(Box::new(FileStorage::with_format(path, StorageFormat::Toml))),
        "memory" => Ok(Box::new(MemoryStorage::new())),
        other => Err(StorageError::UnknownProvider(other.to_string())),
    }
}
