use std::fmt::Write;

use crate::aggregate::{FileReport, RunSummary};
use crate::error::Result;
use crate::finding::{Finding, Severity};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(super) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

const RULE_WIDTH: usize = 70;

/// Human-readable console report.
pub struct TextFormatter {
    use_colors: bool,
    show_lines: bool,
    group_by_rule: bool,
    summary_only: bool,
    top_rules: usize,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            show_lines: true,
            group_by_rule: false,
            summary_only: false,
            top_rules: 5,
        }
    }

    #[must_use]
    pub const fn with_lines(mut self, show: bool) -> Self {
        self.show_lines = show;
        self
    }

    #[must_use]
    pub const fn with_grouping(mut self, group_by_rule: bool) -> Self {
        self.group_by_rule = group_by_rule;
        self
    }

    /// Print only the run summary, no per-file blocks.
    #[must_use]
    pub const fn with_summary_only(mut self, summary_only: bool) -> Self {
        self.summary_only = summary_only;
        self
    }

    #[must_use]
    pub const fn with_top_rules(mut self, n: usize) -> Self {
        self.top_rules = n;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let color = Self::severity_color(finding.severity);
        let label = self.paint(&finding.severity.as_str().to_uppercase(), color);
        let rule = self.paint(&format!("[{}]", finding.rule_id), ansi::BOLD);

        if finding.is_file_level() {
            let _ = writeln!(output, "{label}: {rule} {}", finding.message);
        } else {
            let _ = writeln!(
                output,
                "{label}: Line {}:{} {rule} {}",
                finding.line_number, finding.column, finding.message
            );
        }

        if self.show_lines && !finding.line_content.is_empty() {
            let _ = writeln!(output, "  {} {}", self.paint("│", color), finding.line_content);
        }
        if finding.has_suggestion() {
            let _ = writeln!(output, "  {} {}", self.paint("└─", color), finding.suggestion);
        }
    }

    /// Render the block for one file.
    #[must_use]
    pub fn format_file(&self, report: &FileReport) -> String {
        let mut output = String::new();
        let banner = "=".repeat(RULE_WIDTH);

        let _ = writeln!(output, "{banner}");
        let _ = writeln!(
            output,
            "{}",
            self.paint(&report.path.display().to_string(), ansi::BOLD)
        );
        let _ = writeln!(output, "{banner}");

        if report.findings.is_empty() {
            let _ = writeln!(output, "{} No issues found", self.paint("✓", ansi::GREEN));
        } else if self.group_by_rule {
            for (rule, findings) in report.findings.group_by_rule() {
                let _ = writeln!(output, "Rule: {rule} ({} issues)", findings.len());
                let _ = writeln!(output, "{}", "─".repeat(RULE_WIDTH));
                for finding in findings {
                    self.format_finding(finding, &mut output);
                }
                let _ = writeln!(output);
            }
        } else {
            for finding in &report.findings {
                self.format_finding(finding, &mut output);
            }
        }
        let _ = writeln!(output);

        output
    }

    /// Render the totals block.
    #[must_use]
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        let mut output = String::new();
        let counts = summary.counts;

        let _ = writeln!(output, "{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(output, "{}", self.paint("Summary", ansi::BOLD));
        let _ = writeln!(output, "{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(output, "Files checked: {}", summary.files);
        let _ = writeln!(output, "Total issues: {}", summary.total_issues());
        let _ = writeln!(
            output,
            "  Errors: {}",
            self.paint(&counts.errors.to_string(), ansi::RED)
        );
        let _ = writeln!(
            output,
            "  Warnings: {}",
            self.paint(&counts.warnings.to_string(), ansi::YELLOW)
        );
        let _ = writeln!(
            output,
            "  Info: {}",
            self.paint(&counts.info.to_string(), ansi::CYAN)
        );

        let top = summary.top_rules(self.top_rules);
        if !top.is_empty() {
            let _ = writeln!(output);
            let _ = writeln!(output, "Top rules:");
            for (rule, count) in top {
                let _ = writeln!(output, "  {rule}: {count}");
            }
        }

        output
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport], summary: &RunSummary) -> Result<String> {
        let mut output = String::new();
        if !self.summary_only {
            for report in reports {
                output.push_str(&self.format_file(report));
            }
        }
        output.push_str(&self.format_summary(summary));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
