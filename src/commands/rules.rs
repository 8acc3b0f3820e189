use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::checker::{CheckRegistry, Scope};
use crate::finding::{FILE_READ_RULE, Severity};

#[must_use]
pub fn run_rules() -> i32 {
    print!("{}", format_rules(&CheckRegistry::default()));
    EXIT_SUCCESS
}

/// One row per rule: id, severity, whether code blocks are checked, description.
#[must_use]
pub fn format_rules(registry: &CheckRegistry) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{:<26} {:<8} {:<6} DESCRIPTION", "RULE", "SEVERITY", "CODE");
    for check in registry.iter() {
        let code = match check.scope() {
            Scope::Prose => "skip",
            Scope::Everywhere => "check",
        };
        let _ = writeln!(
            output,
            "{:<26} {:<8} {:<6} {}",
            check.id(),
            check.severity(),
            code,
            check.description()
        );
    }
    let _ = writeln!(
        output,
        "{:<26} {:<8} {:<6} {}",
        FILE_READ_RULE,
        Severity::Error,
        "-",
        "File could not be read"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_rule() {
        let registry = CheckRegistry::default();
        let output = format_rules(&registry);

        assert_eq!(output.lines().count(), registry.len() + 2);
        for id in registry.ids() {
            assert!(output.contains(id));
        }
        assert!(output.contains(FILE_READ_RULE));
    }

    #[test]
    fn shows_severity_and_scope() {
        let output = format_rules(&CheckRegistry::default());
        let alt = output.lines().find(|l| l.starts_with("alt-text")).unwrap();

        assert!(alt.contains("error"));
        assert!(alt.contains("check"));
    }
}
