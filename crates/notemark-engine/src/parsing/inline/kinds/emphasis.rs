//! Emphasis-family delimiters: strong, strikethrough and single emphasis.
//!
//! Strong and strikethrough are matched with plain regexes. Single
//! emphasis needs a lookaround rule the regex engine does not offer, so it
//! is matched by [`Emphasis::find`] which checks the neighbouring
//! characters by hand.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

pub struct Strong;

impl Strong {
    pub const STARS: &'static str = "**";
    pub const UNDERSCORES: &'static str = "__";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\*\*([^\n]+?)\*\*|__([^\n]+?)__").expect("Invalid strong regex")
        })
    }
}

pub struct Strikethrough;

impl Strikethrough {
    pub const TILDE: char = '~';
    pub const TILDES: &'static str = "~~";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"~~([^\n]+?)~~").expect("Invalid strikethrough regex"))
    }
}

/// A single-emphasis match: the whole span and the inner text range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmphasisMatch {
    pub full: Range<usize>,
    pub inner: Range<usize>,
}

pub struct Emphasis;

impl Emphasis {
    pub const STAR: char = '*';
    pub const UNDERSCORE: char = '_';

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\*([^*\n]+)\*|_([^_\n]+)_").expect("Invalid emphasis regex")
        })
    }

    /// Finds the first single-emphasis span at or after `from`.
    ///
    /// A delimiter touching another copy of itself is never a single
    /// emphasis delimiter, so `**` runs left over from the strong pass stay
    /// literal. `_` additionally must not touch a word character, which
    /// keeps `snake_case_names` intact.
    pub fn find(s: &str, from: usize) -> Option<EmphasisMatch> {
        let mut search = from;
        while let Some(caps) = Self::regex().captures_at(s, search) {
            let full = caps.get(0)?;
            let inner = caps.get(1).or_else(|| caps.get(2))?;
            let delim = if caps.get(1).is_some() {
                Self::STAR
            } else {
                Self::UNDERSCORE
            };

            let before = s[..full.start()].chars().next_back();
            let after = s[full.end()..].chars().next();
            if Self::is_free_side(before, delim) && Self::is_free_side(after, delim) {
                return Some(EmphasisMatch {
                    full: full.range(),
                    inner: inner.range(),
                });
            }
            // Retry from just past the rejected opening delimiter.
            search = full.start() + delim.len_utf8();
        }
        None
    }

    fn is_free_side(neighbour: Option<char>, delim: char) -> bool {
        match neighbour {
            None => true,
            Some(c) if c == delim => false,
            Some(c) if delim == Self::UNDERSCORE => !c.is_alphanumeric(),
            Some(_) => true,
        }
    }
}
