mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::{ErrorOutput, stderr_supports_color};
pub use json::JsonFormatter;
pub use progress::LintProgress;
pub use text::{ColorMode, TextFormatter};

use crate::aggregate::{FileReport, RunSummary};
use crate::error::Result;

/// Trait for rendering lint results.
pub trait OutputFormatter {
    /// Format the per-file reports and the run summary into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport], summary: &RunSummary) -> Result<String>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
