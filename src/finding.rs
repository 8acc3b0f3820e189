use std::fmt;

use serde::{Deserialize, Serialize};

/// Finding severity. Ordered so that `Error > Warning > Info`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// A single style violation.
///
/// `line_number` is 1-based; `0` is reserved for file-level findings, which never
/// carry `line_content`. `column` is a 0-based character offset within the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub line_number: usize,
    pub column: usize,
    pub severity: Severity,
    pub rule_id: &'static str,
    pub message: String,
    pub line_content: String,
    pub suggestion: String,
}

impl Finding {
    #[must_use]
    pub fn new(
        line_number: usize,
        column: usize,
        severity: Severity,
        rule_id: &'static str,
        message: impl Into<String>,
        line_content: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            column,
            severity,
            rule_id,
            message: message.into(),
            line_content: line_content.into(),
            suggestion: String::new(),
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    /// File-level finding for a file that could not be read.
    #[must_use]
    pub fn file_read(description: &str) -> Self {
        Self::new(
            0,
            0,
            Severity::Error,
            FILE_READ_RULE,
            format!("Error reading file: {description}"),
            "",
        )
    }

    #[must_use]
    pub const fn is_file_level(&self) -> bool {
        self.line_number == 0
    }

    #[must_use]
    pub fn has_suggestion(&self) -> bool {
        !self.suggestion.is_empty()
    }
}

pub const FILE_READ_RULE: &str = "file-read";

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
