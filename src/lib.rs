//! Markdown prose linter for technical documentation.
//!
//! A [`linter::Linter`] runs every check in a [`checker::CheckRegistry`] over a
//! [`context::Document`] and returns the findings sorted by position.

pub mod aggregate;
pub mod catalog;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod finding;
pub mod linter;
pub mod logging;
pub mod output;
pub mod scanner;

pub use error::{ProseGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERRORS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
