use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

fn check_args(args: &[&str]) -> CheckArgs {
    let cli = Cli::parse_from(args);
    match cli.command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn cli_check_with_paths() {
    let args = check_args(&["prose-guard", "check", "README.md", "docs"]);
    assert_eq!(args.paths, vec![PathBuf::from("README.md"), PathBuf::from("docs")]);
    assert!(args.severity.is_none());
    assert!(!args.summary);
}

#[test]
fn cli_check_requires_paths() {
    let result = Cli::try_parse_from(["prose-guard", "check"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_severity() {
    let args = check_args(&["prose-guard", "check", "a.md", "--severity", "warning"]);
    assert_eq!(args.severity, Some(SeverityChoice::Warning));
    assert_eq!(Severity::from(SeverityChoice::Warning), Severity::Warning);
}

#[test]
fn cli_check_rejects_unknown_severity() {
    let result = Cli::try_parse_from(["prose-guard", "check", "a.md", "--severity", "fatal"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_reporting_flags() {
    let args = check_args(&[
        "prose-guard",
        "check",
        "a.md",
        "--json",
        "out.json",
        "--summary",
        "--group-by-rule",
        "--hide-lines",
        "--no-color",
        "--top",
        "3",
    ]);

    assert_eq!(args.json, Some(PathBuf::from("out.json")));
    assert!(args.summary);
    assert!(args.group_by_rule);
    assert!(args.hide_lines);
    assert!(args.no_color);
    assert_eq!(args.top, Some(3));
}

#[test]
fn cli_check_disable_accepts_lists() {
    let args = check_args(&[
        "prose-guard",
        "check",
        "a.md",
        "--disable",
        "passive-voice,double-space",
        "--disable",
        "spelling",
    ]);
    assert_eq!(args.disable, vec!["passive-voice", "double-space", "spelling"]);
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["prose-guard", "check", "a.md", "-vv", "--no-config", "--color", "never"]);

    assert_eq!(cli.verbose, 2);
    assert!(cli.no_config);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
}

#[test]
fn cli_rules_command() {
    let cli = Cli::parse_from(["prose-guard", "rules"]);
    assert!(matches!(cli.command, Commands::Rules));
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["prose-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".prose-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn color_mode_folds_in_no_color() {
    let cli = Cli::parse_from(["prose-guard", "check", "a.md", "--no-color", "--color", "always"]);
    assert_eq!(cli.color_mode(), ColorMode::Never);

    let cli = Cli::parse_from(["prose-guard", "--color", "always", "rules"]);
    assert_eq!(cli.color_mode(), ColorMode::Always);

    let cli = Cli::parse_from(["prose-guard", "check", "a.md"]);
    assert_eq!(cli.color_mode(), ColorMode::Auto);
}
