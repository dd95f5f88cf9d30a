//! # Parsing
//!
//! Loose plain text (which may or may not be markdown) → [`Document`].
//!
//! - **`blocks`**: line classification and the block builder
//! - **`inline`**: ordered inline passes with placeholder freezing
//! - **`cursor`**: byte cursor shared by the block kinds

pub mod blocks;
pub mod cursor;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::markup::{normalize_newlines, serialize, serialize_inlines};
use crate::models::Document;

use blocks::BlockBuilder;

/// Parses a full text buffer into a document.
///
/// Never fails: anything the block parser cannot classify becomes
/// paragraph text, and malformed inline syntax stays literal.
pub fn parse(text: &str) -> Document {
    let text = normalize_newlines(text);
    let mut builder = BlockBuilder::new();
    for line in text.split('\n') {
        builder.push(line);
    }
    Document::new(builder.finish())
}

/// Parses and serializes a text buffer in one step.
pub fn render_markdown(text: &str) -> String {
    serialize(&parse(text))
}

/// Renders one line of raw text as inline markup.
pub fn render_inline(line: &str) -> String {
    serialize_inlines(&inline::parse_inline(line))
}
