use super::*;

#[test]
fn severity_is_strictly_ordered() {
    assert!(Severity::Error > Severity::Warning);
    assert!(Severity::Warning > Severity::Info);
    assert!(Severity::Error > Severity::Info);
}

#[test]
fn severity_parses_case_insensitively() {
    assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("Info".parse::<Severity>().unwrap(), Severity::Info);
    assert!("fatal".parse::<Severity>().is_err());
}

#[test]
fn severity_displays_lowercase() {
    assert_eq!(Severity::Warning.to_string(), "warning");
}

#[test]
fn file_read_finding_is_file_level_error() {
    let finding = Finding::file_read("No such file or directory");

    assert!(finding.is_file_level());
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.rule_id, FILE_READ_RULE);
    assert!(finding.line_content.is_empty());
    assert!(finding.message.contains("No such file"));
}

#[test]
fn suggestion_defaults_to_empty() {
    let finding = Finding::new(3, 4, Severity::Info, "spelling", "msg", "line");
    assert!(!finding.has_suggestion());

    let finding = finding.with_suggestion("Use: canceled");
    assert!(finding.has_suggestion());
    assert_eq!(finding.suggestion, "Use: canceled");
}
