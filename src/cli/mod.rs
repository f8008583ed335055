//! cli
//!
//! Command-line interface layer for moviedb.
//!
//! # Responsibilities
//!
//! - Parse command-line flags
//! - Merge flags with the config file and pick a storage backend
//! - Hand stdin/stdout to the menu loop in [`app`]
//!
//! # Architecture
//!
//! The CLI layer is thin. The menu loop only talks to storage through the
//! [`crate::storage::MovieStorage`] trait, so the same loop runs against a
//! file, an in-memory catalog, or a test double.

pub mod app;
pub mod args;
pub mod menu;

pub use app::{AppError, MovieApp};
pub use args::Cli;
pub use menu::MenuCommand;

use std::io;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::storage;
use crate::ui::output::{self, Verbosity};

/// Where the catalog lives after flags and config are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    /// Provider name accepted by [`storage::create_storage`]
    pub provider: String,
    /// Path to the movie file
    pub path: PathBuf,
}

impl StorageSettings {
    /// Resolve storage settings.
    ///
    /// Flags override the config file. With no explicit provider anywhere,
    /// the provider follows the extension of the final path.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let path = cli.file.clone().unwrap_or_else(|| config.storage_path());
        let provider = cli
            .storage
            .as_deref()
            .or_else(|| config.storage_provider_override())
            .unwrap_or_else(|| storage::provider_for_path(&path))
            .to_string();
        Self { provider, path }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = Config::load().context("Failed to load configuration")?;

    let verbosity = Verbosity::from_flags(cli.quiet || config.quiet(), cli.debug);
    if let Some(path) = config.loaded_from() {
        output::debug(format!("config loaded from {}", path.display()), verbosity);
    }

    let settings = StorageSettings::resolve(&cli, &config);
    output::debug(
        format!(
            "storage: {} at {}",
            settings.provider,
            settings.path.display()
        ),
        verbosity,
    );

    let storage = storage::create_storage(&settings.provider, &settings.path)
        .context("Failed to open movie storage")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = MovieApp::new(storage, stdin.lock(), stdout.lock(), verbosity);
    app.run().context("Menu loop failed")?;

    Ok(())
}
