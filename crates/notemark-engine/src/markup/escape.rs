//! Text ↔ markup escaping.
//!
//! Every literal string placed into generated markup goes through
//! [`escape`] (or [`escape_attr`] inside attribute values). Skipping it is
//! a correctness bug, not a recoverable condition.

use std::borrow::Cow;

/// Escapes `&`, `<` and `>` for use in element content.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escapes `&`, `<`, `>` and `"` for use inside a double-quoted attribute.
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// Decodes named and numeric character references back to text.
///
/// Inverse of [`escape`] for everything `escape` produces, and also handles
/// the common entities found in hand-written markup (`&nbsp;`, `&#39;`, ...).
pub fn decode_entities(markup: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(markup)
}
