//! moviedb - a terminal movie catalog
//!
//! moviedb keeps a personal list of movies (title, year, rating, optional
//! poster URL) in a single document on disk and lets the user list, add,
//! delete, update, search, sort, and summarize it from an interactive menu.
//!
//! # Architecture
//!
//! - [`cli`] - Flag parsing, the menu table, and the dispatcher loop
//! - [`core`] - Domain types, read-only queries, and configuration
//! - [`storage`] - Persistence boundary behind the `MovieStorage` trait
//! - [`ui`] - Prompts and output formatting
//!
//! # Invariants
//!
//! 1. Titles are unique within the catalog
//! 2. Every storage operation starts from a fresh load of the whole catalog
//! 3. Every mutation is saved before the operation returns

pub mod cli;
pub mod core;
pub mod storage;
pub mod ui;
