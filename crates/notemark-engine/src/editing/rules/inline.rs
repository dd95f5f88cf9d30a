use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::kinds::{CodeSpan, Emphasis, Strikethrough};

/// Characters whose insertion may close an inline span.
pub const TRIGGERS: [char; 4] = [
    Emphasis::STAR,
    Emphasis::UNDERSCORE,
    Strikethrough::TILDE,
    CodeSpan::TICK,
];

pub fn is_trigger(c: char) -> bool {
    TRIGGERS.contains(&c)
}

/// Formatting an inline promotion creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Strong,
    Strikethrough,
    Code,
    Emphasis,
}

/// A delimited span that ends exactly at the end of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub kind: InlineKind,
    /// The span including its delimiters.
    pub span: Range<usize>,
    /// The text between the delimiters.
    pub inner: Range<usize>,
}

fn strong_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:\*\*([^\s*](?:[^*]*[^\s*])?)\*\*|__([^\s_](?:[^_]*[^\s_])?)__)$")
            .expect("Invalid strong promotion regex")
    })
}

fn strike_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"~~([^\s~](?:[^~]*[^\s~])?)~~$").expect("Invalid strikethrough promotion regex")
    })
}

fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`\n]+)`$").expect("Invalid code promotion regex"))
}

fn emphasis_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:\*([^\s*](?:[^*]*[^\s*])?)\*|_([^\s_](?:[^_]*[^\s_])?)_)$")
            .expect("Invalid emphasis promotion regex")
    })
}

/// Finds a complete delimiter pair ending exactly at the end of `text`.
///
/// Checked in order: strong, strikethrough, code, emphasis. Single
/// emphasis never opens right after the same delimiter (`**a*` is not
/// `*a*`), and `_` never opens right after a letter or digit.
pub fn match_at_end(text: &str) -> Option<InlineMatch> {
    let passes: [(InlineKind, &Regex); 4] = [
        (InlineKind::Strong, strong_regex()),
        (InlineKind::Strikethrough, strike_regex()),
        (InlineKind::Code, code_regex()),
        (InlineKind::Emphasis, emphasis_regex()),
    ];
    passes.into_iter().find_map(|(kind, re)| {
        let caps = re.captures(text)?;
        let span = caps.get(0)?.range();
        let inner = caps.get(1).or_else(|| caps.get(2))?.range();
        if kind == InlineKind::Emphasis && !opens_freely(text, span.start) {
            return None;
        }
        Some(InlineMatch { kind, span, inner })
    })
}

fn opens_freely(text: &str, start: usize) -> bool {
    let delimiter = text[start..].chars().next();
    let before = text[..start].chars().next_back();
    match (before, delimiter) {
        (None, _) => true,
        (Some(b), Some(d)) if b == d => false,
        (Some(b), Some(Emphasis::UNDERSCORE)) => !b.is_alphanumeric(),
        _ => true,
    }
}
