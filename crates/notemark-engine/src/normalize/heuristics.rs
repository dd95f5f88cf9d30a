//! The two content-classifier heuristics.

use std::sync::OnceLock;

use regex::RegexSet;

use crate::markup::census;

/// True when `raw` is already a real structured document: it holds some
/// element other than an attribute-less `div`/`p`/`br`, and nothing that
/// can run code (`script`, `style`, `iframe`, `object`, `embed`).
pub fn has_substantive_markup(raw: &str) -> bool {
    census(raw).is_substantive()
}

/// Line and span shapes that hint at markdown. A heuristic, not a
/// grammar: a false positive only costs a pass through the block parser.
const MARKDOWN_HINTS: &[&str] = &[
    // ATX heading
    r"(?m)^[ \t]*#+[ \t]+\S",
    // list marker
    r"(?m)^[ \t]*(?:[-*+]|\d{1,9}[.)])[ \t]+\S",
    // blockquote
    r"(?m)^[ \t]*>",
    // code fence
    r"(?m)^[ \t]*(?:```|~~~)",
    // bracket link
    r"\[[^\]\n]+\]\([^)\s]+\)",
    // strong
    r"\*\*[^*\n]+\*\*|__[^_\n]+__",
    // strikethrough
    r"~~[^~\n]+~~",
    // emphasis
    r"\*[^*\s][^*\n]*\*|(?:^|\W)_[^_\s][^_\n]*_(?:\W|$)",
    // code span
    r"`[^`\n]+`",
    // horizontal rule
    r"(?m)^[ \t]*(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$",
];

fn hints() -> &'static RegexSet {
    static HINTS: OnceLock<RegexSet> = OnceLock::new();
    HINTS.get_or_init(|| RegexSet::new(MARKDOWN_HINTS).expect("Invalid markdown hint regex"))
}

/// True if plain `text` matches at least one markdown hint.
pub fn looks_like_markdown(text: &str) -> bool {
    hints().is_match(text)
}
