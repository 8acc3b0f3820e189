//! Merging, filtering and counting of findings.
//!
//! Checks return their findings independently. [`FindingSet`] merges them into
//! line/column order for one file, [`FileReport`] attaches the path, and
//! [`RunSummary`] reduces many reports into run totals.

use std::collections::BTreeMap;
use std::ops::Deref;
use std::path::PathBuf;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;

use crate::finding::{Finding, Severity};

/// Per-severity tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl SeverityCounts {
    pub const fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => self.info += 1,
        }
    }

    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            errors: self.errors + other.errors,
            warnings: self.warnings + other.warnings,
            info: self.info + other.info,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.errors + self.warnings + self.info
    }
}

/// Findings for one file, ordered by line then column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindingSet {
    findings: Vec<Finding>,
}

impl FindingSet {
    /// Sort an unordered union of check outputs.
    ///
    /// The sort is stable, so findings at the same position keep the order in
    /// which they were produced.
    #[must_use]
    pub fn from_unsorted(mut findings: Vec<Finding>) -> Self {
        findings.sort_by_key(|f| (f.line_number, f.column));
        Self { findings }
    }

    /// Keep findings at or above `min`.
    #[must_use]
    pub fn filter_min_severity(mut self, min: Severity) -> Self {
        self.findings.retain(|f| f.severity >= min);
        self
    }

    /// Group by rule id, in order of first appearance.
    #[must_use]
    pub fn group_by_rule(&self) -> IndexMap<&'static str, Vec<&Finding>> {
        let mut groups: IndexMap<&'static str, Vec<&Finding>> = IndexMap::new();
        for finding in &self.findings {
            groups.entry(finding.rule_id).or_default().push(finding);
        }
        groups
    }

    #[must_use]
    pub fn counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for finding in &self.findings {
            counts.add(finding.severity);
        }
        counts
    }

    /// Occurrences per rule id, keyed in id order.
    #[must_use]
    pub fn rule_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.rule_id).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }
}

impl Deref for FindingSet {
    type Target = [Finding];

    fn deref(&self) -> &[Finding] {
        &self.findings
    }
}

impl<'a> IntoIterator for &'a FindingSet {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}

/// Result of linting one input.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: FindingSet,
}

impl FileReport {
    #[must_use]
    pub const fn new(path: PathBuf, findings: FindingSet) -> Self {
        Self { path, findings }
    }

    #[must_use]
    pub fn filter_min_severity(self, min: Severity) -> Self {
        Self {
            path: self.path,
            findings: self.findings.filter_min_severity(min),
        }
    }

    #[must_use]
    pub fn counts(&self) -> SeverityCounts {
        self.findings.counts()
    }

    #[must_use]
    pub fn rule_counts(&self) -> BTreeMap<&'static str, usize> {
        self.findings.rule_counts()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.has_errors()
    }
}

/// Totals across every processed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub counts: SeverityCounts,
    pub rule_counts: BTreeMap<&'static str, usize>,
}

impl RunSummary {
    #[must_use]
    pub fn from_report(report: &FileReport) -> Self {
        Self {
            files: 1,
            counts: report.counts(),
            rule_counts: report.rule_counts(),
        }
    }

    /// Reduce all reports in parallel into one summary.
    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        reports
            .par_iter()
            .map(Self::from_report)
            .reduce(Self::default, Self::merge)
    }

    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.files += other.files;
        self.counts = self.counts.merge(other.counts);
        for (rule, count) in other.rule_counts {
            *self.rule_counts.entry(rule).or_insert(0) += count;
        }
        self
    }

    #[must_use]
    pub const fn total_issues(&self) -> usize {
        self.counts.total()
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.counts.errors > 0
    }

    /// The `n` most frequent rules, most frequent first, ties by rule id.
    #[must_use]
    pub fn top_rules(&self, n: usize) -> Vec<(&'static str, usize)> {
        let mut rules: Vec<_> = self
            .rule_counts
            .iter()
            .map(|(rule, count)| (*rule, *count))
            .collect();
        rules.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rules.truncate(n);
        rules
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
