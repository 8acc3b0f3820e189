use regex::Regex;

use crate::catalog::{self, Term};
use crate::context::{Document, Line};
use crate::finding::{Finding, Severity};

use super::{Check, char_column};

/// How a term table is matched against a line.
///
/// The two modes intentionally differ in how many hits a line can produce:
/// substring tables report only the first occurrence of each trigger, while
/// word-bounded tables report every occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matching {
    /// Case-insensitive substring search, first occurrence per trigger.
    FirstSubstring,
    /// Case-insensitive `\b...\b` regex, every occurrence.
    WordBoundary,
}

type MessageFn = fn(&Term, &str) -> String;
type SuggestionFn = fn(&Term) -> String;

/// Catalog-driven substitution check.
pub struct TermCheck {
    id: &'static str,
    severity: Severity,
    description: &'static str,
    terms: &'static [Term],
    matching: Matching,
    patterns: Vec<Regex>,
    message: MessageFn,
    suggestion: SuggestionFn,
    /// Accept a match that already has the capitalization of a
    /// case-only alternative ("Internet" for the `internet` entry).
    allow_recased: bool,
}

impl TermCheck {
    #[must_use]
    pub fn new(
        id: &'static str,
        severity: Severity,
        description: &'static str,
        terms: &'static [Term],
        matching: Matching,
    ) -> Self {
        let patterns = match matching {
            Matching::FirstSubstring => Vec::new(),
            Matching::WordBoundary => terms
                .iter()
                .map(|term| {
                    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term.trigger)))
                        .expect("Invalid regex")
                })
                .collect(),
        };
        Self {
            id,
            severity,
            description,
            terms,
            matching,
            patterns,
            message: |term, _| format!("Avoid '{}'", term.trigger),
            suggestion: |term| format!("Use: {}", term.replacement().unwrap_or_default()),
            allow_recased: false,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: MessageFn) -> Self {
        self.message = message;
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: SuggestionFn) -> Self {
        self.suggestion = suggestion;
        self
    }

    #[must_use]
    pub fn allowing_recased(mut self) -> Self {
        self.allow_recased = true;
        self
    }

    #[must_use]
    pub fn forbidden_phrases() -> Self {
        Self::new(
            "forbidden-phrase",
            Severity::Warning,
            "Wordy, vague, or filler phrases with simpler alternatives",
            catalog::FORBIDDEN_PHRASES,
            Matching::FirstSubstring,
        )
        .with_suggestion(|term| {
            term.replacement()
                .map_or_else(|| "Remove this word".to_string(), |r| format!("Replace with: {r}"))
        })
    }

    #[must_use]
    pub fn latin_abbreviations() -> Self {
        Self::new(
            "latin-abbreviation",
            Severity::Warning,
            "Latin abbreviations such as e.g. and i.e.",
            catalog::LATIN_ABBREVIATIONS,
            Matching::FirstSubstring,
        )
        .with_message(|term, _| format!("Avoid Latin abbreviation '{}'", term.trigger))
    }

    #[must_use]
    pub fn preferred_terms() -> Self {
        Self::new(
            "preferred-term",
            Severity::Info,
            "Terminology with a preferred spelling or form",
            catalog::PREFERRED_TERMS,
            Matching::WordBoundary,
        )
        .with_message(|term, matched| {
            format!(
                "Prefer '{}' over '{matched}'",
                term.replacement().unwrap_or_default()
            )
        })
        .allowing_recased()
    }

    #[must_use]
    pub fn gender_neutral() -> Self {
        Self::new(
            "gender-neutral",
            Severity::Warning,
            "Gendered pronouns and terms",
            catalog::GENDERED_TERMS,
            Matching::WordBoundary,
        )
        .with_message(|_, matched| format!("Use gender-neutral language: '{matched}'"))
        .with_suggestion(|term| format!("Consider: {}", term.replacement().unwrap_or_default()))
    }

    #[must_use]
    pub fn spelling() -> Self {
        Self::new(
            "spelling",
            Severity::Info,
            "Preferred US spellings of common technical words",
            catalog::SPELLING_CORRECTIONS,
            Matching::WordBoundary,
        )
        .with_message(|term, matched| {
            format!(
                "Use '{}' instead of '{matched}'",
                term.replacement().unwrap_or_default()
            )
        })
    }

    #[must_use]
    pub fn inclusive_language() -> Self {
        Self::new(
            "inclusive-language",
            Severity::Warning,
            "Non-inclusive terms with neutral alternatives",
            catalog::INCLUSIVE_TERMS,
            Matching::WordBoundary,
        )
        .with_message(|_, matched| format!("Use inclusive language: avoid '{matched}'"))
        .with_suggestion(|term| format!("Consider: {}", term.replacement().unwrap_or_default()))
    }

    fn push(
        &self,
        term: &Term,
        line: Line<'_>,
        column: usize,
        matched: &str,
        out: &mut Vec<Finding>,
    ) {
        out.push(
            self.finding(line, column, (self.message)(term, matched))
                .with_suggestion((self.suggestion)(term)),
        );
    }

    fn check_substrings(&self, line: Line<'_>, out: &mut Vec<Finding>) {
        let lower = line.text.to_lowercase();
        for term in self.terms {
            if let Some(byte) = lower.find(term.trigger) {
                let column = char_column(&lower, byte);
                self.push(term, line, column, term.trigger, out);
            }
        }
    }

    fn check_word_bounded(&self, line: Line<'_>, out: &mut Vec<Finding>) {
        for (term, pattern) in self.terms.iter().zip(&self.patterns) {
            for m in pattern.find_iter(line.text) {
                if self.allow_recased && is_recased(term, m.as_str()) {
                    continue;
                }
                let column = char_column(line.text, m.start());
                self.push(term, line, column, m.as_str(), out);
            }
        }
    }
}

/// `matched` is written exactly as an alternative that differs from the
/// trigger only in letter case.
fn is_recased(term: &Term, matched: &str) -> bool {
    term.alternatives
        .iter()
        .any(|alt| *alt == matched && alt.eq_ignore_ascii_case(term.trigger))
}

impl Check for TermCheck {
    fn id(&self) -> &'static str {
        self.id
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        match self.matching {
            Matching::FirstSubstring => self.check_substrings(line, out),
            Matching::WordBoundary => self.check_word_bounded(line, out),
        }
    }
}

#[cfg(test)]
#[path = "lexical_tests.rs"]
mod tests;
