//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Line prompts with re-prompting on bad input
//! - [`output`] - Output formatting and stderr diagnostics

pub mod output;
pub mod prompts;
