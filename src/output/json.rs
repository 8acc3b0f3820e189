use std::collections::BTreeMap;

use serde::Serialize;

use crate::aggregate::{FileReport, RunSummary};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileEntry>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    total_issues: usize,
    errors: usize,
    warnings: usize,
    info: usize,
}

#[derive(Serialize)]
struct FileEntry {
    filepath: String,
    total_issues: usize,
    errors: usize,
    warnings: usize,
    info: usize,
    rule_counts: BTreeMap<&'static str, usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport], summary: &RunSummary) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: summary.files,
                total_issues: summary.total_issues(),
                errors: summary.counts.errors,
                warnings: summary.counts.warnings,
                info: summary.counts.info,
            },
            files: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> FileEntry {
    let counts = report.counts();
    FileEntry {
        filepath: report.path.display().to_string(),
        total_issues: counts.total(),
        errors: counts.errors,
        warnings: counts.warnings,
        info: counts.info,
        rule_counts: report.rule_counts(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
