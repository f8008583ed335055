//! core
//!
//! Core domain types and operations for moviedb.
//!
//! # Modules
//!
//! - [`types`] - Movie, Year, MovieCollection
//! - [`query`] - Statistics, search, sorting, random pick
//! - [`config`] - Configuration schema and loading
//!
//! Nothing in here does console I/O.

pub mod config;
pub mod query;
pub mod types;
