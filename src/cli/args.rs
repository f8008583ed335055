//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! There are no subcommands; everything happens in the interactive menu.
//! The flags choose where the catalog lives and how chatty the output is:
//! - `--file <path>`: Movie file to use
//! - `--storage <provider>`: Storage provider (json, toml, memory)
//! - `--debug`: Debug diagnostics on stderr
//! - `--quiet` / `-q`: No banner or farewell

use clap::Parser;
use std::path::PathBuf;

/// moviedb - manage a personal movie catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "moviedb")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
MENU:
    0. Exit                      5. Stats
    1. List movies               6. Random movie
    2. Add movie                 7. Search movie
    3. Delete movie              8. Movies sorted by rating
    4. Update movie              9. Generate website

EXAMPLES:
    # Use movies.json in the current directory
    moviedb

    # Keep the catalog as TOML somewhere else
    moviedb --file ~/catalog/movies.toml

    # Try things out without touching any file
    moviedb --storage memory")]
pub struct Cli {
    /// Movie file to read and write (default: movies.json)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Storage provider; inferred from the file extension if omitted
    #[arg(long, value_name = "PROVIDER", value_parser = ["json", "toml", "memory"])]
    pub storage: Option<String>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
