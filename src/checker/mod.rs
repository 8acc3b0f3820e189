mod accessibility;
mod formatting;
mod language;
mod lexical;
mod links;
mod structure;
mod typography;

pub use accessibility::{AltTextCheck, ColorOnlyCheck};
pub use formatting::{ClickOnCheck, CodeFormatCheck, UiElementCheck};
pub use language::{ContractionCheck, DirectionalCheck, FutureTenseCheck, PassiveVoiceCheck};
pub use lexical::{Matching, TermCheck};
pub use links::{LinkDescriptiveCheck, LinkSeeCheck, LinkTextCheck};
pub use structure::{
    HeadingCaseCheck, HeadingGerundCheck, HeadingPunctuationCheck, ListParallelCheck,
    ListPunctuationCheck,
};
pub use typography::{
    DoubleSpaceCheck, InternetCapitalizationCheck, LeadingZeroCheck, NumberStartCheck,
    NumberUnitSpaceCheck, SerialCommaCheck, SpaceBeforePunctuationCheck,
};

use crate::context::{Document, Line};
use crate::error::{ProseGuardError, Result};
use crate::finding::{Finding, Severity};

/// Which lines a check looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Lines outside fenced code blocks.
    Prose,
    /// Every readable line, code blocks included.
    Everywhere,
}

/// A single style rule.
///
/// Each check has a fixed rule id and severity and is a pure function of the
/// document: no state is shared between checks.
pub trait Check: Send + Sync {
    fn id(&self) -> &'static str;

    fn severity(&self) -> Severity;

    /// One-line description shown by `prose-guard rules`.
    fn description(&self) -> &'static str;

    fn scope(&self) -> Scope {
        Scope::Prose
    }

    /// Inspect one line, pushing any findings onto `out`.
    fn check_line(&self, line: Line<'_>, doc: &Document, out: &mut Vec<Finding>);

    /// Run the check over every line in its scope.
    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        match self.scope() {
            Scope::Prose => {
                for line in doc.prose_lines() {
                    self.check_line(line, doc, &mut findings);
                }
            }
            Scope::Everywhere => {
                for line in doc.all_lines() {
                    self.check_line(line, doc, &mut findings);
                }
            }
        }
        findings
    }

    /// Build a finding carrying this check's id and severity.
    fn finding(&self, line: Line<'_>, column: usize, message: String) -> Finding
    where
        Self: Sized,
    {
        Finding::new(
            line.number,
            column,
            self.severity(),
            self.id(),
            message,
            line.text,
        )
    }
}

/// Ordered collection of the active checks.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    #[must_use]
    pub const fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    #[must_use]
    pub fn with(mut self, check: impl Check + 'static) -> Self {
        self.register(Box::new(check));
        self
    }

    /// Drop the checks named in `disabled`.
    ///
    /// # Errors
    /// Returns an error if any id does not name a registered check.
    pub fn without<S: AsRef<str>>(mut self, disabled: &[S]) -> Result<Self> {
        for id in disabled {
            let id = id.as_ref();
            if !self.contains(id) {
                return Err(ProseGuardError::UnknownRule(id.to_string()));
            }
        }
        self.checks
            .retain(|check| !disabled.iter().any(|id| id.as_ref() == check.id()));
        Ok(self)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|check| check.id() == id)
            .map(|check| &**check)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|check| &**check)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.id()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::empty()
            .with(TermCheck::forbidden_phrases())
            .with(ContractionCheck::new())
            .with(TermCheck::latin_abbreviations())
            .with(TermCheck::preferred_terms())
            .with(DirectionalCheck::new())
            .with(FutureTenseCheck::new())
            .with(TermCheck::gender_neutral())
            .with(TermCheck::spelling())
            .with(PassiveVoiceCheck::new())
            .with(HeadingCaseCheck::new())
            .with(HeadingPunctuationCheck::new())
            .with(HeadingGerundCheck::new())
            .with(ListParallelCheck::new())
            .with(ListPunctuationCheck::new())
            .with(InternetCapitalizationCheck::new())
            .with(DoubleSpaceCheck)
            .with(SpaceBeforePunctuationCheck::new())
            .with(SerialCommaCheck::new())
            .with(NumberStartCheck::new())
            .with(NumberUnitSpaceCheck::new())
            .with(LeadingZeroCheck::new())
            .with(UiElementCheck::new())
            .with(ClickOnCheck::new())
            .with(CodeFormatCheck::new())
            .with(LinkTextCheck::new())
            .with(LinkDescriptiveCheck::new())
            .with(LinkSeeCheck::new())
            .with(AltTextCheck::new())
            .with(ColorOnlyCheck::new())
            .with(TermCheck::inclusive_language())
    }
}

/// Convert a byte offset in `text` into a character offset.
pub(crate) fn char_column(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset)
        .map_or(byte_offset, |prefix| prefix.chars().count())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
