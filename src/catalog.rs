//! Static style-rule catalog: trigger terms and their replacement guidance.

/// A catalog entry mapping a trigger to zero or more alternative replacements.
///
/// An empty `alternatives` list means the trigger should simply be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub trigger: &'static str,
    pub alternatives: &'static [&'static str],
}

impl Term {
    pub const fn new(trigger: &'static str, alternatives: &'static [&'static str]) -> Self {
        Self {
            trigger,
            alternatives,
        }
    }

    /// Alternatives joined for display, e.g. `"must or will"`.
    #[must_use]
    pub fn replacement(&self) -> Option<String> {
        if self.alternatives.is_empty() {
            None
        } else {
            Some(self.alternatives.join(" or "))
        }
    }
}

pub const FORBIDDEN_PHRASES: &[Term] = &[
    Term::new("please note", &["Note:"]),
    Term::new("please remember", &["Remember:"]),
    Term::new("in order to", &["to"]),
    Term::new("it is recommended", &["we recommend"]),
    Term::new("utilize", &["use"]),
    Term::new("terminate", &["end"]),
    Term::new("initiate", &["start"]),
    Term::new("leverage", &["use"]),
    Term::new("click on", &["select"]),
    Term::new("simply", &[]),
    Term::new("just", &[]),
    Term::new("easy", &[]),
    Term::new("easily", &[]),
    Term::new("obviously", &[]),
    Term::new("clearly", &[]),
    Term::new("basically", &[]),
    Term::new("actually", &[]),
    Term::new("very", &[]),
    Term::new("via", &["through"]),
    Term::new("e.g.", &["for example"]),
    Term::new("i.e.", &["that is"]),
    Term::new("etc.", &["and so on"]),
    Term::new("as well as", &["and"]),
    Term::new("shall", &["must", "will"]),
    Term::new("may or may not", &["might"]),
    Term::new("in the event that", &["if"]),
    Term::new("at this point in time", &["now"]),
    Term::new("for the purpose of", &["to"]),
    Term::new("due to the fact that", &["because"]),
];

pub const LATIN_ABBREVIATIONS: &[Term] = &[
    Term::new("e.g.", &["for example"]),
    Term::new("i.e.", &["that is"]),
    Term::new("etc.", &["and so on"]),
    Term::new("et al.", &["and others"]),
    Term::new("via", &["through"]),
    Term::new("vs.", &["versus"]),
    Term::new("cf.", &["compare"]),
];

pub const PREFERRED_TERMS: &[Term] = &[
    Term::new("webpage", &["web page"]),
    Term::new("web site", &["website"]),
    Term::new("internet", &["Internet"]),
    Term::new("e-mail", &["email"]),
    Term::new("log in", &["sign in"]),
    Term::new("login", &["sign-in"]),
    Term::new("log on", &["sign in"]),
    Term::new("logon", &["sign-in"]),
    Term::new("logout", &["sign out"]),
    Term::new("username", &["user name"]),
    Term::new("wifi", &["Wi-Fi"]),
    Term::new("backend", &["back end"]),
    Term::new("frontend", &["front end"]),
    Term::new("enduser", &["end user"]),
    Term::new("file name", &["filename"]),
    Term::new("check box", &["checkbox"]),
    Term::new("double click", &["double-click"]),
    Term::new("right click", &["right-click"]),
    Term::new("grayed", &["dimmed", "unavailable"]),
    Term::new("grayed out", &["unavailable"]),
    Term::new("hit", &["press", "select"]),
    Term::new("type in", &["enter", "type"]),
    Term::new("box", &["dialog box", "text box"]),
    Term::new("deselect", &["clear"]),
    Term::new("uncheck", &["clear"]),
];

pub const GENDERED_TERMS: &[Term] = &[
    Term::new("he", &["they"]),
    Term::new("she", &["they"]),
    Term::new("his", &["their"]),
    Term::new("her", &["their"]),
    Term::new("him", &["them"]),
    Term::new("himself", &["themselves"]),
    Term::new("herself", &["themselves"]),
    Term::new("mankind", &["people", "humanity"]),
    Term::new("manmade", &["synthetic", "artificial"]),
    Term::new("man-hours", &["person-hours", "hours"]),
];

pub const SPELLING_CORRECTIONS: &[Term] = &[
    Term::new("cancelled", &["canceled"]),
    Term::new("cancelling", &["canceling"]),
    Term::new("labelled", &["labeled"]),
    Term::new("labelling", &["labeling"]),
    Term::new("modelling", &["modeling"]),
    Term::new("travelled", &["traveled"]),
    Term::new("focussed", &["focused"]),
    Term::new("work-around", &["workaround"]),
];

pub const INCLUSIVE_TERMS: &[Term] = &[
    Term::new("blacklist", &["blocklist", "denylist"]),
    Term::new("whitelist", &["allowlist", "safelist"]),
    Term::new("master", &["primary", "main"]),
    Term::new("slave", &["secondary", "replica"]),
    Term::new("native", &["built-in", "core"]),
    Term::new("grandfathered", &["legacy"]),
    Term::new("dummy", &["placeholder", "sample"]),
    Term::new("sanity check", &["consistency check", "validation"]),
    Term::new("crazy", &["unexpected", "surprising"]),
    Term::new("insane", &["extreme", "intensive"]),
    Term::new("cripple", &["disable", "limit"]),
    Term::new("blind", &["without knowledge of", "hidden"]),
    Term::new("man-in-the-middle", &["machine-in-the-middle", "interceptor"]),
];

/// Contraction and its expanded form.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("won't", "will not"),
    ("can't", "cannot"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("couldn't", "could not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("here's", "here is"),
    ("what's", "what is"),
    ("who's", "who is"),
    ("they're", "they are"),
];

pub const DIRECTIONAL_WORDS: &[&str] = &[
    "above", "below", "left", "right", "top", "bottom", "upper", "lower",
];

/// Nouns that make a directional word a UI reference ("left panel").
pub const UI_REFERENT_NOUNS: &[&str] = &["menu", "bar", "corner", "section", "panel"];

pub const FUTURE_INDICATORS: &[&str] = &[
    "will be",
    "will have",
    "will see",
    "will allow",
    "will enable",
    "is going to",
    "are going to",
];

pub const PASSIVE_AUXILIARIES: &[&str] = &["is", "are", "was", "were", "be", "been", "being"];

/// Substrings that disable the passive-voice heuristic for a line.
pub const PASSIVE_EXEMPT_WORDS: &[&str] = &["speed", "need", "feed"];

pub const UI_VERBS: &[&str] = &["click", "select", "choose", "press", "enter", "type"];

/// UI verbs that should themselves be replaced by "select".
pub const UI_VERBS_PREFER_SELECT: &[&str] = &["click", "press"];

pub const CODE_INDICATORS: &[&str] = &[
    "function",
    "method",
    "class",
    "variable",
    "parameter",
    "property",
];

pub const NON_DESCRIPTIVE_LINK_TEXT: &[&str] = &["click here", "here", "this link", "this page"];

pub const COLOR_WORDS: &[&str] = &["red", "green", "blue", "yellow", "colored", "highlighted"];

/// Nouns that qualify a color word ("red icon").
pub const COLOR_QUALIFIERS: &[&str] = &["text", "background", "icon", "button"];

pub const UNITS: &[&str] = &["GB", "MB", "KB", "TB", "ms", "cm", "mm", "km", "kg", "mg"];

/// Regex alternation of `words`, each escaped.
#[must_use]
pub fn alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
