//! storage::file_store
//!
//! File-backed movie storage.
//!
//! # Format
//!
//! The catalog is one document mapping title to record:
//!
//! ```json
//! {
//!   "Inception": { "year": 2010, "rating": 8.8 },
//!   "Up": { "year": 2009, "rating": 8.3, "poster": "https://..." }
//! }
//! ```
//!
//! The same shape is written as TOML tables when the file ends in `.toml`.
//!
//! # Durability
//!
//! - A missing or empty file reads as an empty catalog
//! - Ratings must be finite numbers (TOML can spell `nan` and `inf`)
//! - Writes are atomic (write to temp file, then rename)
//! - Parent directories are created on first write
//!
//! Nothing guards against another process editing the file between the
//! load and the save of a single operation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::traits::{MovieStorage, StorageError};
use crate::core::types::{Movie, MovieCollection, Year};

/// Encoding of the movie file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    Json,
    Toml,
}

impl StorageFormat {
    /// Pick a format from a file extension.
    ///
    /// `.toml` selects TOML; anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => StorageFormat::Toml,
            _ => StorageFormat::Json,
        }
    }

    fn decode(self, path: &Path, content: &str) -> Result<MovieCollection, StorageError> {
        let parsed: Result<MovieCollection, String> = match self {
            StorageFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            StorageFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        let movies = parsed.map_err(|message| StorageError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        if let Some((title, movie)) = movies.iter().find(|(_, m)| !m.rating.is_finite()) {
            return Err(StorageError::Parse {
                path: path.to_path_buf(),
                message: format!("rating of '{}' is not a number: {}", title, movie.rating),
            });
        }
        Ok(movies)
    }

    fn encode(self, movies: &MovieCollection) -> Result<String, StorageError> {
        match self {
            StorageFormat::Json => serde_json::to_string_pretty(movies)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| StorageError::Serialize(e.to_string())),
            StorageFormat::Toml => {
                toml::to_string_pretty(movies).map_err(|e| StorageError::Serialize(e.to_string()))
            }
        }
    }
}

/// File-based movie storage.
#[derive(Debug)]
pub struct FileStorage {
    /// Path to the movie file
    path: PathBuf,
    /// Encoding of the movie file
    format: StorageFormat,
}

impl FileStorage {
    /// Create a store for `path`, choosing the format from its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = StorageFormat::from_path(&path);
        Self { path, format }
    }

    /// Create a store with an explicit format.
    pub fn with_format(path: impl Into<PathBuf>, format: StorageFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Get the path to the movie file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the encoding of the movie file.
    pub fn format(&self) -> StorageFormat {
        self.format
    }

    fn load(&self) -> Result<MovieCollection, StorageError> {
        if !self.path.exists() {
            return Ok(MovieCollection::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(MovieCollection::new());
        }

        self.format.decode(&self.path, &content)
    }

    fn save(&self, movies: &MovieCollection) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_error(&self.path))?;
            }
        }

        let content = self.format.encode(movies)?;

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(write_error(&temp_path))?;

            file.write_all(content.as_bytes())
                .map_err(write_error(&temp_path))?;
            file.sync_all().map_err(write_error(&temp_path))?;
        }

        fs::rename(&temp_path, &self.path).map_err(write_error(&self.path))?;

        Ok(())
    }
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError {
    let path = path.to_path_buf();
    move |source| StorageError::Write { path, source }
}

impl MovieStorage for FileStorage {
    fn list_movies(&self) -> Result<MovieCollection, StorageError> {
        self.load()
    }

    fn add_movie(
        &self,
        title: &str,
        year: Year,
        rating: f64,
        poster: Option<String>,
    ) -> Result<bool, StorageError> {
        let mut movies = self.load()?;
        if movies.contains_key(title) {
            return Ok(false);
        }
        movies.insert(title.to_string(), Movie::new(year, rating, poster));
        self.save(&movies)?;
        Ok(true)
    }

    fn delete_movie(&self, title: &str) -> Result<bool, StorageError> {
        let mut movies = self.load()?;
        if movies.remove(title).is_none() {
            return Ok(false);
        }
        self.save(&movies)?;
        Ok(true)
    }

    fn update_movie(&self, title: &str, rating: f64) -> Result<bool, StorageError> {
        let mut movies = self.load()?;
        match movies.get_mut(title) {
            Some(movie) => movie.rating = rating,
            None => return Ok(false),
        }
        self.save(&movies)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store(file_name: &str) -> (TempDir, FileStorage) {
        let temp = TempDir::new().expect("create temp dir");
        let store = FileStorage::new(temp.path().join(file_name));
        (temp, store)
    }

    fn seed(store: &FileStorage) {
        store
            .add_movie("Inception", Year::Number(2010), 8.8, None)
            .expect("add Inception");
        store
            .add_movie("Up", Year::Number(2009), 8.3, None)
            .expect("add Up");
    }

    #[test]
    fn missing_file_is_empty() {
        let (_temp, store) = create_test_store("movies.json");
        assert!(store.list_movies().expect("list").is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn empty_file_is_empty() {
        let (_temp, store) = create_test_store("movies.json");
        fs::write(store.path(), "").expect("write");
        assert!(store.list_movies().expect("list").is_empty());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            StorageFormat::from_path(Path::new("movies.json")),
            StorageFormat::Json
        );
        assert_eq!(
            StorageFormat::from_path(Path::new("movies.TOML")),
            StorageFormat::Toml
        );
        assert_eq!(
            StorageFormat::from_path(Path::new("movies")),
            StorageFormat::Json
        );
    }

    #[test]
    fn catalog_walkthrough() {
        let (_temp, store) = create_test_store("movies.json");
        seed(&store);

        assert!(store
            .add_movie("Her", Year::from("2013"), 8.0, None)
            .expect("add Her"));
        assert_eq!(store.list_movies().expect("list").len(), 3);

        assert!(!store
            .add_movie("Up", Year::from("2020"), 9.0, None)
            .expect("add duplicate"));
        let movies = store.list_movies().expect("list");
        assert_eq!(movies.len(), 3);
        assert_eq!(movies["Up"].rating, 8.3);

        assert!(store.delete_movie("Up").expect("delete"));
        assert_eq!(store.list_movies().expect("list").len(), 2);

        assert!(store.update_movie("Inception", 9.0).expect("update"));
        let movies = store.list_movies().expect("list");
        assert_eq!(movies["Inception"].rating, 9.0);
        assert_eq!(movies["Inception"].year, Year::Number(2010));
    }

    #[test]
    fn delete_absent_leaves_file_untouched() {
        let (_temp, store) = create_test_store("movies.json");
        seed(&store);
        let before = fs::read_to_string(store.path()).expect("read");

        assert!(!store.delete_movie("Jaws").expect("delete"));
        assert_eq!(fs::read_to_string(store.path()).expect("read"), before);
    }

    #[test]
    fn update_absent_does_not_create_file() {
        let (_temp, store) = create_test_store("movies.json");
        assert!(!store.update_movie("Jaws", 5.0).expect("update"));
        assert!(!store.path().exists());
    }

    #[test]
    fn update_keeps_poster() {
        let (_temp, store) = create_test_store("movies.json");
        store
            .add_movie(
                "Up",
                Year::Number(2009),
                8.3,
                Some("https://example.com/up.jpg".into()),
            )
            .expect("add");
        store.update_movie("Up", 9.1).expect("update");

        let movie = &store.list_movies().expect("list")["Up"];
        assert_eq!(movie.rating, 9.1);
        assert_eq!(movie.poster.as_deref(), Some("https://example.com/up.jpg"));
    }

    #[test]
    fn reads_hand_written_json() {
        let (_temp, store) = create_test_store("movies.json");
        fs::write(
            store.path(),
            r#"{"Titanic": {"year": "1997", "rating": 7.9}, "Heat": {"year": 1995, "rating": 8.3}}"#,
        )
        .expect("write");

        let movies = store.list_movies().expect("list");
        assert_eq!(movies["Titanic"].year, Year::Text("1997".into()));
        assert_eq!(movies["Heat"].year, Year::Number(1995));
    }

    #[test]
    fn toml_storage() {
        let (_temp, store) = create_test_store("movies.toml");
        assert_eq!(store.format(), StorageFormat::Toml);
        seed(&store);

        let content = fs::read_to_string(store.path()).expect("read");
        assert!(content.contains("[Inception]"));

        let movies = store.list_movies().expect("list");
        assert_eq!(movies["Up"].rating, 8.3);
        assert_eq!(movies["Up"].year, Year::Number(2009));
    }

    #[test]
    fn titles_needing_quotes_in_toml() {
        let (_temp, store) = create_test_store("movies.toml");
        store
            .add_movie("Star Wars: A New Hope", Year::Number(1977), 8.6, None)
            .expect("add");
        let movies = store.list_movies().expect("list");
        assert!(movies.contains_key("Star Wars: A New Hope"));
    }

    #[test]
    fn explicit_format_overrides_extension() {
        let temp = TempDir::new().expect("create temp dir");
        let store = FileStorage::with_format(temp.path().join("catalog.db"), StorageFormat::Toml);
        seed(&store);
        let content = fs::read_to_string(store.path()).expect("read");
        assert!(!content.trim_start().starts_with('{'));
    }

    #[test]
    fn invalid_content_is_parse_error() {
        let (_temp, store) = create_test_store("movies.json");
        fs::write(store.path(), "{not json").expect("write");

        match store.list_movies() {
            Err(StorageError::Parse { path, .. }) => assert_eq!(path, store.path()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_rating_is_parse_error() {
        let (_temp, store) = create_test_store("movies.toml");
        fs::write(
            store.path(),
            "[Heat]\nyear = 1995\nrating = 8.3\n\n[Jaws]\nyear = 1975\nrating = nan\n",
        )
        .expect("write");

        match store.list_movies() {
            Err(StorageError::Parse { message, .. }) => assert!(message.contains("Jaws")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn every_operation_rereads_the_file() {
        let (_temp, store) = create_test_store("movies.json");
        seed(&store);
        assert_eq!(store.list_movies().expect("list").len(), 2);

        fs::write(
            store.path(),
            r#"{"Heat": {"year": 1995, "rating": 8.3}}"#,
        )
        .expect("overwrite");

        let movies = store.list_movies().expect("list");
        assert_eq!(movies.keys().collect::<Vec<_>>(), vec!["Heat"]);

        assert!(store
            .add_movie("Inception", Year::Number(2010), 8.8, None)
            .expect("add after external edit"));
        assert!(!store
            .add_movie("Heat", Year::Number(1995), 1.0, None)
            .expect("add duplicate of external entry"));
        assert!(!store.delete_movie("Up").expect("delete"));

        let movies = store.list_movies().expect("list");
        assert_eq!(movies.len(), 2);
        assert_eq!(movies["Heat"].rating, 8.3);
        assert!(!movies.contains_key("Up"));
    }

    #[test]
    fn creates_directory_if_missing() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join("subdir").join("movies.json");
        let store = FileStorage::new(path.clone());

        seed(&store);

        assert!(path.exists());
        assert!(!temp.path().join("subdir").join("movies.json.tmp").exists());
    }

    #[test]
    fn persistence_across_instances() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join("movies.json");

        {
            let store = FileStorage::new(path.clone());
            seed(&store);
        }

        {
            let store = FileStorage::new(path);
            let movies = store.list_movies().expect("list");
            assert_eq!(movies.len(), 2);
            assert!(movies.contains_key("Inception"));
        }
    }
}
