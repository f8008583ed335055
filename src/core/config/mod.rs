//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$MOVIEDB_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/moviedb/config.toml`
//! 3. `~/.moviedb/config.toml`
//!
//! A missing config file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use moviedb::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Movies at {}", config.storage_path().display());
//! ```

pub mod schema;

pub use schema::{DisplayConfig, GlobalConfig, StorageConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::storage;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MOVIEDB_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
///
/// Accessor methods apply defaults for anything the file leaves out.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File contents (all defaults if no file was found)
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        global.validate()?;

        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap already-parsed settings that did not come from a file.
    pub fn from_global(global: GlobalConfig) -> Self {
        Self { global, path: None }
    }

    fn find_config_file() -> Option<PathBuf> {
        // 1. Check $MOVIEDB_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/moviedb/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("moviedb/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.moviedb/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".moviedb/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the configured storage provider, if any.
    ///
    /// `None` means "infer from the file extension".
    pub fn storage_provider_override(&self) -> Option<&str> {
        self.global
            .storage
            .as_ref()
            .and_then(|s| s.provider.as_deref())
    }

    /// Get the path to the movie file.
    ///
    /// Defaults to `movies.json` in the working directory.
    pub fn storage_path(&self) -> PathBuf {
        self.global
            .storage
            .as_ref()
            .and_then(|s| s.path.as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(storage::DEFAULT_PATH))
    }

    /// Check if quiet output is the default.
    ///
    /// Defaults to `false` if not configured.
    pub fn quiet(&self) -> bool {
        self.global
            .display
            .as_ref()
            .and_then(|d| d.quiet)
            .unwrap_or(false)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
