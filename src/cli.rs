use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::finding::Severity;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Minimum severity to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeverityChoice {
    Error,
    Warning,
    Info,
}

impl From<SeverityChoice> for Severity {
    fn from(choice: SeverityChoice) -> Self {
        match choice {
            SeverityChoice::Error => Self::Error,
            SeverityChoice::Warning => Self::Warning,
            SeverityChoice::Info => Self::Info,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "prose-guard")]
#[command(author, version, about = "Markdown prose linter for technical documentation style")]
#[command(long_about = "Checks Markdown prose against technical writing style rules: \
    wordy phrases, contractions, headings, lists, links, accessibility and more.\n\n\
    Exit codes:\n  \
    0 - No error-severity findings\n  \
    1 - At least one error-severity finding\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective color mode, folding in `check --no-color`.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        match &self.command {
            Commands::Check(args) if args.no_color => ColorMode::Never,
            _ => self.color.into(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint Markdown files
    Check(CheckArgs),

    /// List every rule with its severity
    Rules,

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Files or directories to lint
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum severity to report (overrides config)
    #[arg(short, long, value_enum)]
    pub severity: Option<SeverityChoice>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write a JSON report to this file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Show only the run summary
    #[arg(long)]
    pub summary: bool,

    /// Group findings by rule within each file
    #[arg(long)]
    pub group_by_rule: bool,

    /// Do not print the offending source line
    #[arg(long)]
    pub hide_lines: bool,

    /// Number of rules listed in the summary
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Disable a rule by id (repeatable or comma-separated)
    #[arg(long, value_name = "RULE", value_delimiter = ',')]
    pub disable: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".prose-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
