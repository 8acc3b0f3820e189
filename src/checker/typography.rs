use regex::Regex;

use crate::catalog::{self, alternation};
use crate::context::{Document, Line};
use crate::finding::{Finding, Severity};

use super::{Check, char_column};

pub struct InternetCapitalizationCheck {
    pattern: Regex,
}

impl Default for InternetCapitalizationCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl InternetCapitalizationCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\binternet\b").expect("Invalid regex"),
        }
    }
}

impl Check for InternetCapitalizationCheck {
    fn id(&self) -> &'static str {
        "internet-capitalization"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "Lowercase 'internet'"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for m in self.pattern.find_iter(line.text) {
            out.push(
                self.finding(
                    line,
                    char_column(line.text, m.start()),
                    "'Internet' should be capitalized".to_string(),
                )
                .with_suggestion("Use: Internet"),
            );
        }
    }
}

/// First run of two spaces on a line.
pub struct DoubleSpaceCheck;

impl Check for DoubleSpaceCheck {
    fn id(&self) -> &'static str {
        "double-space"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Two consecutive spaces"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        if let Some(byte) = line.text.find("  ") {
            out.push(
                self.finding(
                    line,
                    char_column(line.text, byte),
                    "Use a single space between sentences".to_string(),
                )
                .with_suggestion("Remove extra space"),
            );
        }
    }
}

pub struct SpaceBeforePunctuationCheck {
    pattern: Regex,
}

impl Default for SpaceBeforePunctuationCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceBeforePunctuationCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\s+[.,!?;:]").expect("Invalid regex"),
        }
    }
}

impl Check for SpaceBeforePunctuationCheck {
    fn id(&self) -> &'static str {
        "space-before-punctuation"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "Whitespace directly before a punctuation mark"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        if let Some(m) = self.pattern.find(line.text) {
            out.push(
                self.finding(
                    line,
                    char_column(line.text, m.start()),
                    "No space before punctuation".to_string(),
                )
                .with_suggestion("Remove space before punctuation mark"),
            );
        }
    }
}

/// `word, word and word`: a series missing the comma before "and".
pub struct SerialCommaCheck {
    pattern: Regex,
}

impl Default for SerialCommaCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialCommaCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\w+,\s+\w+\s+and\s+\w+").expect("Invalid regex"),
        }
    }
}

impl Check for SerialCommaCheck {
    fn id(&self) -> &'static str {
        "serial-comma"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Series of three without a serial comma"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        if let Some(m) = self.pattern.find(line.text) {
            out.push(
                self.finding(
                    line,
                    char_column(line.text, m.start()),
                    "Use a serial comma in a series".to_string(),
                )
                .with_suggestion("Add a comma before 'and' in the series"),
            );
        }
    }
}

pub struct NumberStartCheck {
    pattern: Regex,
}

impl Default for NumberStartCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberStartCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^\d+").expect("Invalid regex"),
        }
    }
}

impl Check for NumberStartCheck {
    fn id(&self) -> &'static str {
        "number-start"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Lines that begin with a numeral"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        if self.pattern.is_match(line.text.trim()) {
            out.push(
                self.finding(
                    line,
                    0,
                    "Spell out numbers at the beginning of a sentence".to_string(),
                )
                .with_suggestion("Rewrite the sentence or spell out the number"),
            );
        }
    }
}

pub struct NumberUnitSpaceCheck {
    pattern: Regex,
}

impl Default for NumberUnitSpaceCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberUnitSpaceCheck {
    #[must_use]
    pub fn new() -> Self {
        let units = alternation(catalog::UNITS.iter().copied());
        Self {
            pattern: Regex::new(&format!(r"(\d+)({units})")).expect("Invalid regex"),
        }
    }
}

impl Check for NumberUnitSpaceCheck {
    fn id(&self) -> &'static str {
        "number-unit-space"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "Number written directly against a unit abbreviation"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for caps in self.pattern.captures_iter(line.text) {
            let (Some(whole), Some(number), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            out.push(
                self.finding(
                    line,
                    char_column(line.text, whole.start()),
                    "Add a space between number and unit".to_string(),
                )
                .with_suggestion(format!("Use: {} {}", number.as_str(), unit.as_str())),
            );
        }
    }
}

/// Decimal fraction written without a leading zero (`.5`).
pub struct LeadingZeroCheck {
    pattern: Regex,
}

impl Default for LeadingZeroCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadingZeroCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\.\d+").expect("Invalid regex"),
        }
    }
}

impl Check for LeadingZeroCheck {
    fn id(&self) -> &'static str {
        "leading-zero"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Decimal point without a leading zero"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for m in self.pattern.find_iter(line.text) {
            let preceded_by_digit = line.text[..m.start()]
                .chars()
                .next_back()
                .is_some_and(char::is_numeric);
            if preceded_by_digit {
                continue;
            }
            out.push(
                self.finding(
                    line,
                    char_column(line.text, m.start()),
                    "Include a zero before the decimal point".to_string(),
                )
                .with_suggestion(format!("Use: 0{}", m.as_str())),
            );
        }
    }
}

#[cfg(test)]
#[path = "typography_tests.rs"]
mod tests;
