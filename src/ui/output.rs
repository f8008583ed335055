//! ui::output
//!
//! Output formatting and diagnostics.
//!
//! # Design
//!
//! Command results are written by the dispatcher to its own writer. This
//! module holds the shared line formats and the stderr diagnostics, which
//! respect the verbosity chosen by `--quiet` and `--debug`.

use std::fmt::Display;

use crate::core::types::Movie;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format a rating for display.
///
/// Whole numbers keep one decimal place, so `8.0` stays `8.0`.
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

/// Format one catalog line: `Title (year): rating`.
pub fn format_movie(title: &str, movie: &Movie) -> String {
    format!("{} ({}): {}", title, movie.year, format_rating(movie.rating))
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
