use regex::Regex;

use crate::catalog;
use crate::context::{Document, Line};
use crate::finding::{Finding, Severity};

use super::{Check, char_column};

/// Inline link `[text](url)`.
struct InlineLink(Regex);

impl InlineLink {
    fn new() -> Self {
        Self(Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid regex"))
    }

    /// Yields `(byte_start, text, url)` for every link on the line.
    fn iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, &'a str, &'a str)> + 'a {
        self.0.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((whole.start(), caps.get(1)?.as_str(), caps.get(2)?.as_str()))
        })
    }
}

pub struct LinkTextCheck {
    link: InlineLink,
}

impl Default for LinkTextCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkTextCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            link: InlineLink::new(),
        }
    }
}

impl Check for LinkTextCheck {
    fn id(&self) -> &'static str {
        "link-text"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn description(&self) -> &'static str {
        "Non-descriptive link text such as 'click here'"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for (start, text, _) in self.link.iter(line.text) {
            let lower = text.to_lowercase();
            if catalog::NON_DESCRIPTIVE_LINK_TEXT.iter().any(|p| *p == lower) {
                out.push(
                    self.finding(
                        line,
                        char_column(line.text, start),
                        format!("Avoid '{text}' as link text"),
                    )
                    .with_suggestion("Use descriptive link text that makes sense out of context"),
                );
            }
        }
    }
}

/// Link whose visible text is the URL itself.
pub struct LinkDescriptiveCheck {
    link: InlineLink,
}

impl Default for LinkDescriptiveCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkDescriptiveCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            link: InlineLink::new(),
        }
    }
}

impl Check for LinkDescriptiveCheck {
    fn id(&self) -> &'static str {
        "link-descriptive"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Raw URLs used as link text"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for (start, text, url) in self.link.iter(line.text) {
            if url.starts_with("http") && text.starts_with("http") {
                out.push(
                    self.finding(
                        line,
                        char_column(line.text, start),
                        "Use descriptive link text instead of a URL".to_string(),
                    )
                    .with_suggestion("Replace the URL with a meaningful description"),
                );
            }
        }
    }
}

/// "see" or "refer to" (optionally followed by "the") right before a link.
pub struct LinkSeeCheck {
    link: InlineLink,
    lead_in: Regex,
}

impl Default for LinkSeeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkSeeCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            link: InlineLink::new(),
            lead_in: Regex::new(r"(?i)\b(see|refer\s+to)(\s+the)?\s*$").expect("Invalid regex"),
        }
    }
}

impl Check for LinkSeeCheck {
    fn id(&self) -> &'static str {
        "link-see"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn description(&self) -> &'static str {
        "Links introduced with 'see' or 'refer to'"
    }

    fn check_line(&self, line: Line<'_>, _doc: &Document, out: &mut Vec<Finding>) {
        for (start, _, _) in self.link.iter(line.text) {
            let Some(m) = self.lead_in.find(&line.text[..start]) else {
                continue;
            };
            out.push(
                self.finding(
                    line,
                    char_column(line.text, m.start()),
                    "Link text should be descriptive without 'see' or 'refer to'".to_string(),
                )
                .with_suggestion("Remove 'see' or 'refer to' and use descriptive link text"),
            );
        }
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
