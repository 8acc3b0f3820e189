use serde::{Deserialize, Serialize};

use crate::finding::Severity;

/// Top-level `.prose-guard.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub rules: RulesConfig,
}

/// How directory arguments expand into input files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Extensions (without the dot) picked up when walking a directory.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files and directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules while walking (default: false)
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

/// Reporting defaults for `prose-guard check`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Minimum severity to report.
    #[serde(default)]
    pub severity: Severity,

    #[serde(default)]
    pub group_by_rule: bool,

    /// Print the offending source line under each finding.
    #[serde(default = "default_true")]
    pub show_lines: bool,

    /// Number of rules listed in the run summary.
    #[serde(default = "default_top_rules")]
    pub top_rules: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            group_by_rule: false,
            show_lines: true,
            top_rules: default_top_rules(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Rule ids switched off for every file.
    #[serde(default)]
    pub disabled: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

const fn default_true() -> bool {
    true
}

const fn default_top_rules() -> usize {
    5
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
