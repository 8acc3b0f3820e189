use std::path::PathBuf;

use super::*;

fn finding(line: usize, column: usize, severity: Severity, rule_id: &'static str) -> Finding {
    Finding::new(line, column, severity, rule_id, "msg", "")
}

fn sample() -> FindingSet {
    FindingSet::from_unsorted(vec![
        finding(3, 0, Severity::Info, "passive-voice"),
        finding(1, 7, Severity::Warning, "contraction"),
        finding(1, 2, Severity::Warning, "forbidden-phrase"),
        finding(3, 0, Severity::Error, "alt-text"),
        finding(2, 4, Severity::Warning, "contraction"),
    ])
}

#[test]
fn sorted_by_line_then_column() {
    let set = sample();

    let positions: Vec<_> = set.iter().map(|f| (f.line_number, f.column)).collect();
    assert_eq!(positions, vec![(1, 2), (1, 7), (2, 4), (3, 0), (3, 0)]);
    for pair in set.windows(2) {
        assert!(
            pair[0].line_number < pair[1].line_number
                || (pair[0].line_number == pair[1].line_number && pair[0].column <= pair[1].column)
        );
    }
}

#[test]
fn equal_positions_keep_production_order() {
    let set = sample();
    assert_eq!(set[3].rule_id, "passive-voice");
    assert_eq!(set[4].rule_id, "alt-text");
}

#[test]
fn severity_filter_is_monotonic() {
    let info = sample().filter_min_severity(Severity::Info);
    let warning = sample().filter_min_severity(Severity::Warning);
    let error = sample().filter_min_severity(Severity::Error);

    assert_eq!(info.len(), 5);
    assert_eq!(warning.len(), 4);
    assert_eq!(error.len(), 1);
    assert!(warning.iter().all(|f| info.contains(f)));
    assert!(error.iter().all(|f| warning.contains(f)));
}

#[test]
fn group_by_rule_uses_first_appearance() {
    let set = sample();
    let groups = set.group_by_rule();

    let keys: Vec<_> = groups.keys().copied().collect();
    assert_eq!(keys, vec!["forbidden-phrase", "contraction", "passive-voice", "alt-text"]);
    assert_eq!(groups["contraction"].len(), 2);
}

#[test]
fn counts_and_rule_counts() {
    let set = sample();
    let counts = set.counts();

    assert_eq!(
        counts,
        SeverityCounts {
            errors: 1,
            warnings: 3,
            info: 1
        }
    );
    assert_eq!(counts.total(), 5);
    assert_eq!(set.rule_counts()["contraction"], 2);
    assert!(set.has_errors());
}

#[test]
fn empty_set() {
    let set = FindingSet::default();
    assert!(set.is_empty());
    assert_eq!(set.counts().total(), 0);
    assert!(set.group_by_rule().is_empty());
    assert!(!set.has_errors());
}

#[test]
fn run_summary_reduces_reports() {
    let reports = vec![
        FileReport::new(PathBuf::from("a.md"), sample()),
        FileReport::new(PathBuf::from("b.md"), FindingSet::default()),
        FileReport::new(
            PathBuf::from("c.md"),
            FindingSet::from_unsorted(vec![finding(1, 0, Severity::Info, "passive-voice")]),
        ),
    ];
    let summary = RunSummary::from_reports(&reports);

    assert_eq!(summary.files, 3);
    assert_eq!(summary.total_issues(), 6);
    assert_eq!(summary.counts.info, 2);
    assert!(summary.has_errors());
    assert_eq!(summary.rule_counts["passive-voice"], 2);
}

#[test]
fn run_summary_of_nothing() {
    let summary = RunSummary::from_reports(&[]);
    assert_eq!(summary, RunSummary::default());
    assert!(!summary.has_errors());
}

#[test]
fn top_rules_breaks_ties_by_id() {
    let reports = vec![FileReport::new(PathBuf::from("a.md"), sample())];
    let summary = RunSummary::from_reports(&reports);

    assert_eq!(
        summary.top_rules(3),
        vec![("contraction", 2), ("alt-text", 1), ("forbidden-phrase", 1)]
    );
    assert_eq!(summary.top_rules(10).len(), 4);
}

#[test]
fn filtered_report_drops_lower_severities() {
    let report = FileReport::new(PathBuf::from("a.md"), sample()).filter_min_severity(Severity::Error);

    assert_eq!(report.findings.len(), 1);
    assert!(report.has_errors());
    assert_eq!(report.rule_counts().len(), 1);
}
