//! Heading and list structure checks.
//!
//! These run on every line, fenced code included: document structure is
//! checked wherever it appears.

use regex::Regex;

use crate::context::{Document, Line};
use crate::finding::{Finding, Severity};

use super::{Check, Scope};

/// Matches `#` through `######` followed by whitespace and text.
struct HeadingPattern(Regex);

impl HeadingPattern {
    fn new() -> Self {
        Self(Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid regex"))
    }

    fn title<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.0
            .captures(text)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str().trim())
    }
}

/// Matches unordered (`-`, `*`, `+`) and ordered (`1.`) list items.
struct ListPattern(Regex);

impl ListPattern {
    fn new() -> Self {
        Self(Regex::new(r"^(\s*)([-*+]|\d+\.)\s+(.+)$").expect("Invalid regex"))
    }

    fn content<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.0
            .captures(text)
            .and_then(|caps| caps.get(3))
            .map(|m| m.as_str())
    }
}

fn last_column(text: &str) -> usize {
    text.chars().count().saturating_sub(1)
}

fn starts_with(text: &str, predicate: fn(char) -> bool) -> bool {
    text.chars().next().is_some_and(predicate)
}

/// More than half of the words after the first are capitalized and longer
/// than three characters.
fn looks_title_case(title: &str) -> bool {
    let trailing: Vec<&str> = title.split_whitespace().skip(1).collect();
    if trailing.is_empty() {
        return false;
    }
    let capitalized = trailing
        .iter()
        .filter(|word| starts_with(word, char::is_uppercase) && word.chars().count() > 3)
        .count();
    capitalized * 2 > trailing.len()
}

pub struct HeadingCaseCheck {
    heading: HeadingPattern,
}

impl Default for HeadingCaseCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingCaseCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading: HeadingPattern::new(),
        }
    }
}

impl Check for HeadingCaseCheck {
    fn id(&self) -> &'static str {
        "heading-case"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Headings written in title case instead of sentence case"
    }

    fn scope(&self) -> Scope {
        Scope::Everywhere
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        let Some(title) = self.heading.title(line.text) else {
            return;
        };
        if looks_title_case(title) {
            out.push(
                self.finding(line, 0, "Prefer sentence case for headings".to_string())
                    .with_suggestion(
                        "Use sentence case (capitalize only the first word and proper nouns)",
                    ),
            );
        }
    }
}

pub struct HeadingPunctuationCheck {
    heading: HeadingPattern,
}

impl Default for HeadingPunctuationCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingPunctuationCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading: HeadingPattern::new(),
        }
    }
}

impl Check for HeadingPunctuationCheck {
    fn id(&self) -> &'static str {
        "heading-punctuation"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "Headings ending in . ! ? or :"
    }

    fn scope(&self) -> Scope {
        Scope::Everywhere
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        let Some(title) = self.heading.title(line.text) else {
            return;
        };
        if title.ends_with(['.', '!', '?', ':']) {
            out.push(
                self.finding(
                    line,
                    last_column(line.text),
                    "Headings should not end with punctuation".to_string(),
                )
                .with_suggestion("Remove trailing punctuation"),
            );
        }
    }
}

pub struct HeadingGerundCheck {
    heading: HeadingPattern,
}

impl Default for HeadingGerundCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingGerundCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading: HeadingPattern::new(),
        }
    }
}

impl Check for HeadingGerundCheck {
    fn id(&self) -> &'static str {
        "heading-gerund"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Headings that open with an -ing word"
    }

    fn scope(&self) -> Scope {
        Scope::Everywhere
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        let Some(first) = self
            .heading
            .title(line.text)
            .and_then(|title| title.split_whitespace().next())
        else {
            return;
        };
        if first.to_lowercase().ends_with("ing") {
            out.push(
                self.finding(
                    line,
                    0,
                    format!("Consider using imperative or noun form instead of gerund: '{first}'"),
                )
                .with_suggestion("Use imperative (for example, 'Configure') or noun form"),
            );
        }
    }
}

/// A lowercase list item directly after a capitalized one.
pub struct ListParallelCheck {
    list: ListPattern,
}

impl Default for ListParallelCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ListParallelCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: ListPattern::new(),
        }
    }
}

impl Check for ListParallelCheck {
    fn id(&self) -> &'static str {
        "list-parallel"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Adjacent list items that start with different letter case"
    }

    fn scope(&self) -> Scope {
        Scope::Everywhere
    }

    fn check_line(&self, line: Line<'_>, doc: &Document, out: &mut Vec<Finding>) {
        let Some(content) = self.list.content(line.text) else {
            return;
        };
        if !starts_with(content, char::is_lowercase) {
            return;
        }
        let previous = line
            .index
            .checked_sub(1)
            .and_then(|index| doc.line(index))
            .and_then(|text| self.list.content(text));
        if previous.is_some_and(|prev| starts_with(prev, char::is_uppercase)) {
            out.push(
                self.finding(
                    line,
                    0,
                    "List items should have parallel structure".to_string(),
                )
                .with_suggestion("Ensure all list items start with the same case"),
            );
        }
    }
}

/// A list item of more than five words without terminal punctuation.
pub struct ListPunctuationCheck {
    list: ListPattern,
}

impl Default for ListPunctuationCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ListPunctuationCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: ListPattern::new(),
        }
    }
}

impl Check for ListPunctuationCheck {
    fn id(&self) -> &'static str {
        "list-punctuation"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Sentence-length list items without ending punctuation"
    }

    fn scope(&self) -> Scope {
        Scope::Everywhere
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        let Some(content) = self.list.content(line.text) else {
            return;
        };
        if content.split_whitespace().count() > 5
            && !content.trim_end().ends_with(['.', ':', '!'])
        {
            out.push(
                self.finding(
                    line,
                    last_column(line.text),
                    "Complete sentences in lists should end with a period".to_string(),
                )
                .with_suggestion("Add a period if this is a complete sentence"),
            );
        }
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
