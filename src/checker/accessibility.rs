use regex::Regex;

use crate::catalog::{self, alternation};
use crate::context::{Document, Line};
use crate::finding::{Finding, Severity};

use super::{Check, Scope, char_column};

/// Image markup with empty alt text, e.g. `![](photo.png)`.
pub struct AltTextCheck {
    pattern: Regex,
}

impl Default for AltTextCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl AltTextCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"!\[\s*\]\([^)]+\)").expect("Invalid regex"),
        }
    }
}

impl Check for AltTextCheck {
    fn id(&self) -> &'static str {
        "alt-text"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn description(&self) -> &'static str {
        "Images without alt text"
    }

    fn scope(&self) -> Scope {
        Scope::Everywhere
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for m in self.pattern.find_iter(line.text) {
            out.push(
                self.finding(
                    line,
                    char_column(line.text, m.start()),
                    "Images must have alt text for accessibility".to_string(),
                )
                .with_suggestion("Add descriptive alt text: ![description](url)"),
            );
        }
    }
}

/// Bare color names used as the only carrier of meaning.
pub struct ColorOnlyCheck {
    colors: Vec<(&'static str, Regex)>,
    qualifier: Regex,
}

impl Default for ColorOnlyCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorOnlyCheck {
    #[must_use]
    pub fn new() -> Self {
        let colors = catalog::COLOR_WORDS
            .iter()
            .map(|color| {
                let pattern = format!(r"\b{}\b", regex::escape(color));
                (*color, Regex::new(&pattern).expect("Invalid regex"))
            })
            .collect();
        let qualifiers = alternation(catalog::COLOR_QUALIFIERS.iter().copied());
        Self {
            colors,
            qualifier: Regex::new(&format!(r"^\s+({qualifiers})\b")).expect("Invalid regex"),
        }
    }
}

impl Check for ColorOnlyCheck {
    fn id(&self) -> &'static str {
        "color-only"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "Color named as the only indicator"
    }

    fn scope(&self) -> Scope {
        Scope::Everywhere
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        let lower = line.text.to_lowercase();
        for (color, pattern) in &self.colors {
            let unqualified = pattern
                .find_iter(&lower)
                .find(|m| !self.qualifier.is_match(&lower[m.end()..]));
            if let Some(m) = unqualified {
                out.push(
                    self.finding(
                        line,
                        char_column(&lower, m.start()),
                        format!("Don't rely solely on color ('{color}') to convey information"),
                    )
                    .with_suggestion("Add text labels or icons in addition to color"),
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "accessibility_tests.rs"]
mod tests;
