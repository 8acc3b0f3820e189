use regex::Regex;

use crate::catalog::{self, alternation};
use crate::context::{Document, Line};
use crate::finding::{Finding, Severity};

use super::{Check, char_column};

pub struct ContractionCheck {
    pattern: Regex,
}

impl Default for ContractionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractionCheck {
    #[must_use]
    pub fn new() -> Self {
        let words = alternation(catalog::CONTRACTIONS.iter().map(|(c, _)| *c));
        Self {
            pattern: Regex::new(&format!(r"(?i)\b({words})\b")).expect("Invalid regex"),
        }
    }

    fn expansion(contraction: &str) -> &'static str {
        let lower = contraction.to_lowercase();
        catalog::CONTRACTIONS
            .iter()
            .find(|(c, _)| *c == lower)
            .map_or("expanded form", |(_, expanded)| *expanded)
    }
}

impl Check for ContractionCheck {
    fn id(&self) -> &'static str {
        "contraction"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "Contractions in technical documentation"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for m in self.pattern.find_iter(line.text) {
            let message = format!(
                "Avoid contractions in technical documentation: '{}'",
                m.as_str()
            );
            out.push(
                self.finding(line, char_column(line.text, m.start()), message)
                    .with_suggestion(format!("Use: {}", Self::expansion(m.as_str()))),
            );
        }
    }
}

/// Directional words ("above", "left") that rely on visual layout.
///
/// A match followed by a UI noun ("left panel") is allowed, and a line that
/// contains inline code or mentions a screenshot is skipped entirely.
pub struct DirectionalCheck {
    pattern: Regex,
    ui_referent: Regex,
}

impl Default for DirectionalCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionalCheck {
    #[must_use]
    pub fn new() -> Self {
        let words = alternation(catalog::DIRECTIONAL_WORDS.iter().copied());
        let nouns = alternation(catalog::UI_REFERENT_NOUNS.iter().copied());
        Self {
            pattern: Regex::new(&format!(r"(?i)\b({words})\b")).expect("Invalid regex"),
            ui_referent: Regex::new(&format!(r"(?i)^\s+({nouns})")).expect("Invalid regex"),
        }
    }
}

impl Check for DirectionalCheck {
    fn id(&self) -> &'static str {
        "directional"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "Directional language that depends on page layout"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        if line.text.contains('`') || line.text.to_lowercase().contains("screenshot") {
            return;
        }

        for m in self.pattern.find_iter(line.text) {
            if self.ui_referent.is_match(&line.text[m.end()..]) {
                continue;
            }
            let message = format!("Avoid directional language: '{}'", m.as_str());
            out.push(
                self.finding(line, char_column(line.text, m.start()), message)
                    .with_suggestion("Use 'preceding', 'following', or specific references instead"),
            );
        }
    }
}

pub struct FutureTenseCheck {
    pattern: Regex,
}

impl Default for FutureTenseCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl FutureTenseCheck {
    #[must_use]
    pub fn new() -> Self {
        let phrases = alternation(catalog::FUTURE_INDICATORS.iter().copied());
        Self {
            pattern: Regex::new(&format!(r"(?i)\b({phrases})\b")).expect("Invalid regex"),
        }
    }
}

impl Check for FutureTenseCheck {
    fn id(&self) -> &'static str {
        "future-tense"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Future tense where present tense reads better"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for m in self.pattern.find_iter(line.text) {
            let message = format!("Prefer present tense over future: '{}'", m.as_str());
            out.push(
                self.finding(line, char_column(line.text, m.start()), message)
                    .with_suggestion("Use present tense (for example, 'allows', 'enables', 'displays')"),
            );
        }
    }
}

/// Heuristic: a form of "to be" followed by a word ending in "ed".
pub struct PassiveVoiceCheck {
    pattern: Regex,
}

impl Default for PassiveVoiceCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl PassiveVoiceCheck {
    #[must_use]
    pub fn new() -> Self {
        let auxiliaries = alternation(catalog::PASSIVE_AUXILIARIES.iter().copied());
        Self {
            pattern: Regex::new(&format!(r"(?i)\b({auxiliaries})\s+\w+ed\b"))
                .expect("Invalid regex"),
        }
    }
}

impl Check for PassiveVoiceCheck {
    fn id(&self) -> &'static str {
        "passive-voice"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Likely passive voice constructions"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        let lower = line.text.to_lowercase();
        if catalog::PASSIVE_EXEMPT_WORDS
            .iter()
            .any(|word| lower.contains(*word))
        {
            return;
        }

        for m in self.pattern.find_iter(line.text) {
            out.push(
                self.finding(
                    line,
                    char_column(line.text, m.start()),
                    "Consider using active voice".to_string(),
                )
                .with_suggestion("Rewrite in active voice for clarity"),
            );
        }
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
