//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the storage provider must be
//! one the storage factory knows and the movie file path cannot be empty.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::storage;

/// User configuration.
///
/// # Example
///
/// ```toml
/// [storage]
/// provider = "json"
/// path = "/home/me/movies.json"
///
/// [display]
/// quiet = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Where and how the catalog is stored
    pub storage: Option<StorageConfig>,

    /// Output defaults
    pub display: Option<DisplayConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(storage) = &self.storage {
            storage.validate()?;
        }
        Ok(())
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Provider to use ("json", "toml" or "memory")
    pub provider: Option<String>,

    /// Path to the movie file
    pub path: Option<String>,
}

impl StorageConfig {
    /// Validate the storage configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(provider) = &self.provider {
            let valid = storage::valid_provider_names();
            if !valid.contains(&provider.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid storage provider '{}', must be one of: {}",
                    provider,
                    valid.join(", ")
                )));
            }
        }

        if let Some(path) = &self.path {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "storage path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Display configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Suppress the banner and informational messages
    pub quiet: Option<bool>,
}
