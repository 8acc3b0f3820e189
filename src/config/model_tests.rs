use super::*;

#[test]
fn defaults() {
    let config = Config::default();

    assert_eq!(config.scanner.extensions, vec!["md", "markdown"]);
    assert!(!config.scanner.gitignore);
    assert_eq!(config.check.severity, Severity::Info);
    assert!(config.check.show_lines);
    assert_eq!(config.check.top_rules, 5);
    assert!(config.rules.disabled.is_empty());
}

#[test]
fn empty_toml_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_field_defaults() {
    let config: Config = toml::from_str(
        r#"
[check]
severity = "warning"

[rules]
disabled = ["passive-voice"]
"#,
    )
    .unwrap();

    assert_eq!(config.check.severity, Severity::Warning);
    assert_eq!(config.check.top_rules, 5);
    assert!(config.check.show_lines);
    assert_eq!(config.scanner.extensions, vec!["md", "markdown"]);
    assert_eq!(config.rules.disabled, vec!["passive-voice"]);
}

#[test]
fn unknown_keys_are_rejected() {
    let result: Result<Config, _> = toml::from_str("[check]\nseverity_level = \"info\"\n");
    assert!(result.is_err());
}

#[test]
fn invalid_severity_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[check]\nseverity = \"fatal\"\n");
    assert!(result.is_err());
}
