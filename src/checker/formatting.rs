use regex::Regex;

use crate::catalog::{self, alternation};
use crate::context::{Document, Line};
use crate::finding::{Finding, Severity};

use super::{Check, char_column};

/// A UI verb ("click", "select") followed by an unformatted word.
pub struct UiElementCheck {
    verb: Regex,
    article: Regex,
}

impl Default for UiElementCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl UiElementCheck {
    #[must_use]
    pub fn new() -> Self {
        let verbs = alternation(catalog::UI_VERBS.iter().copied());
        Self {
            verb: Regex::new(&format!(r"(?i)\b({verbs})\s+")).expect("Invalid regex"),
            article: Regex::new(r"(?i)^the\s").expect("Invalid regex"),
        }
    }

    fn is_formatted(target: &str) -> bool {
        target.starts_with("**") || target.starts_with('`')
    }

    fn message(verb: &str) -> String {
        let lower = verb.to_lowercase();
        if catalog::UI_VERBS_PREFER_SELECT.iter().any(|v| *v == lower) {
            format!("UI elements should be bold. Also prefer 'select' over '{verb}'")
        } else {
            "UI elements should be bold".to_string()
        }
    }
}

impl Check for UiElementCheck {
    fn id(&self) -> &'static str {
        "ui-element"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "UI element names that are not bold after an action verb"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for caps in self.verb.captures_iter(line.text) {
            let (Some(whole), Some(verb)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let target = &line.text[whole.end()..];
            if self.article.is_match(target) || Self::is_formatted(target) {
                continue;
            }
            let starts_word = target
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if !starts_word {
                continue;
            }
            out.push(
                self.finding(
                    line,
                    char_column(line.text, whole.start()),
                    Self::message(verb.as_str()),
                )
                .with_suggestion("Format UI element in bold (**element**)"),
            );
        }
    }
}

pub struct ClickOnCheck {
    pattern: Regex,
}

impl Default for ClickOnCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickOnCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"(?i)\bclick on\b").expect("Invalid regex"),
        }
    }
}

impl Check for ClickOnCheck {
    fn id(&self) -> &'static str {
        "click-on"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "The phrase 'click on'"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        if let Some(m) = self.pattern.find(line.text) {
            out.push(
                self.finding(
                    line,
                    char_column(line.text, m.start()),
                    "Use 'select' instead of 'click on'".to_string(),
                )
                .with_suggestion("Replace 'click on' with 'select'"),
            );
        }
    }
}

/// A code noun ("function", "class") followed by a bare identifier.
pub struct CodeFormatCheck {
    pattern: Regex,
}

impl Default for CodeFormatCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeFormatCheck {
    #[must_use]
    pub fn new() -> Self {
        let nouns = alternation(catalog::CODE_INDICATORS.iter().copied());
        Self {
            pattern: Regex::new(&format!(r"(?i)\b({nouns})\s+(\w+)\b")).expect("Invalid regex"),
        }
    }
}

impl Check for CodeFormatCheck {
    fn id(&self) -> &'static str {
        "code-format"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Identifiers after code nouns that are not in backticks"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for caps in self.pattern.captures_iter(line.text) {
            let Some(identifier) = caps.get(2) else {
                continue;
            };
            if line.text[identifier.end()..].starts_with('`') {
                continue;
            }
            out.push(
                self.finding(
                    line,
                    char_column(line.text, identifier.start()),
                    "Code elements should be formatted as code".to_string(),
                )
                .with_suggestion(format!("Wrap in backticks (`{}`)", identifier.as_str())),
            );
        }
    }
}

#[cfg(test)]
#[path = "formatting_tests.rs"]
mod tests;
