use std::fs;

use crate::cli::InitArgs;
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ProseGuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs, color: ColorMode) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::stderr(color).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ProseGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# prose-guard configuration file

[scanner]
# Extensions picked up when a directory is given on the command line
extensions = ["md", "markdown"]

# Glob patterns to skip while walking directories
exclude = []
# exclude = ["**/node_modules/**", "**/CHANGELOG.md"]

# Honor .gitignore files while walking directories (default: false)
gitignore = false

[check]
# Minimum severity to report: "error", "warning" or "info" (default: "info")
severity = "info"

# Group findings by rule instead of listing them by position
group_by_rule = false

# Print the offending source line under each finding
show_lines = true

# Number of most frequent rules listed in the summary
top_rules = 5

[rules]
# Rule ids to switch off. Run `prose-guard rules` for the full list.
disabled = []
# disabled = ["passive-voice", "heading-case"]
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
