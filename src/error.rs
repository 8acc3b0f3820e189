use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProseGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}

impl ProseGuardError {
    /// Short category name used in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::UnknownRule(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Underlying cause, when the variant wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Hint for the operator on how to fix the problem.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the config file format and values"),
            Self::UnknownRule(_) => Some("Run `prose-guard rules` to list valid rule ids"),
            Self::FileRead { source, .. } | Self::Io(source) => io_suggestion(source.kind()),
            Self::InvalidPattern { .. } => Some("Check the glob pattern syntax"),
            Self::TomlParse(_) => Some("Check the TOML syntax of the config file"),
            Self::JsonSerialize(_) => Some("Report output contained non-serializable data"),
        }
    }
}

const fn io_suggestion(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::NotFound => Some("Check that the file path exists"),
        ErrorKind::PermissionDenied => Some("Check the file permissions"),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, ProseGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
