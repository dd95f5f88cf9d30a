use std::sync::OnceLock;

use regex::Regex;

/// Bracket link `[label](url)`.
///
/// Only URLs with one of [`BracketLink::SCHEMES`] become links; any other
/// bracket text is left for later passes as ordinary text.
pub struct BracketLink;

impl BracketLink {
    pub const SCHEMES: &'static [&'static str] = &["http://", "https://", "mailto:"];

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\[([^\]\n]+)\]\(((?:https?://|mailto:)[^\s)]+)\)")
                .expect("Invalid bracket link regex")
        })
    }

    pub fn has_allowed_scheme(url: &str) -> bool {
        Self::SCHEMES.iter().any(|s| url.starts_with(s))
    }
}
