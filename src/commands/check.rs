use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::aggregate::{FileReport, RunSummary};
use crate::checker::CheckRegistry;
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::finding::Severity;
use crate::linter::Linter;
use crate::output::{ErrorOutput, JsonFormatter, LintProgress, OutputFormatter, TextFormatter};
use crate::scanner::{Input, collect_inputs, scanner_from_config};
use crate::{EXIT_CONFIG_ERROR, EXIT_ERRORS_FOUND, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::stderr(cli.color_mode()).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    // Unknown rule ids fail here, before any file is read.
    let registry = CheckRegistry::default().without(&config.rules.disabled)?;
    let linter = Linter::new(registry);

    let scanner = scanner_from_config(&config.scanner)?;
    let inputs = collect_inputs(&args.paths, &scanner)?;
    for input in inputs.iter().filter(|input| input.is_missing()) {
        warn!(path = %input.path().display(), "path does not exist");
    }

    let paths: Vec<PathBuf> = inputs.into_iter().map(Input::into_path).collect();
    info!(files = paths.len(), "linting");

    let reports = lint_files(&linter, &paths, config.check.severity, cli.quiet);
    let summary = RunSummary::from_reports(&reports);

    let text = TextFormatter::new(cli.color_mode())
        .with_lines(config.check.show_lines)
        .with_grouping(config.check.group_by_rule)
        .with_summary_only(args.summary)
        .with_top_rules(config.check.top_rules)
        .format(&reports, &summary)?;
    if !cli.quiet {
        print!("{text}");
    }

    if let Some(json_path) = &args.json {
        let json = JsonFormatter.format(&reports, &summary)?;
        write_report(json_path, &json)?;
        if !cli.quiet {
            println!("\nJSON report saved to: {}", json_path.display());
        }
    }

    Ok(if summary.has_errors() {
        EXIT_ERRORS_FOUND
    } else {
        EXIT_SUCCESS
    })
}

/// Lint every path in parallel, keeping input order in the result.
pub(crate) fn lint_files(
    linter: &Linter,
    paths: &[PathBuf],
    min_severity: Severity,
    quiet: bool,
) -> Vec<FileReport> {
    let progress = LintProgress::new(paths.len() as u64, quiet);
    let reports = paths
        .par_iter()
        .map(|path| {
            let report = linter.lint_path(path).filter_min_severity(min_severity);
            progress.inc();
            report
        })
        .collect();
    progress.finish();
    reports
}

/// Load configuration, honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(severity) = args.severity {
        config.check.severity = severity.into();
    }
    if args.group_by_rule {
        config.check.group_by_rule = true;
    }
    if args.hide_lines {
        config.check.show_lines = false;
    }
    if let Some(top) = args.top {
        config.check.top_rules = top;
    }
    config.rules.disabled.extend(args.disable.iter().cloned());
    config.scanner.exclude.extend(args.exclude.iter().cloned());
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
