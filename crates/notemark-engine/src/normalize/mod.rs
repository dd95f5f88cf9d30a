//! # Normalizer
//!
//! The two entry points the surrounding product calls: [`render_for_display`]
//! when a note is opened and [`normalize_for_save`] when it is saved. Both
//! share one decision table, exposed as [`classify`] / [`Route`]:
//!
//! | stored content | route |
//! |---|---|
//! | empty or blank | [`Route::Empty`] |
//! | substantive markup | [`Route::Preserve`] |
//! | plain text that looks like markdown | [`Route::Markdown`] |
//! | anything else | [`Route::PlainParagraphs`] |
//!
//! Save-time normalization is idempotent: structured output is substantive
//! and so preserved, and paragraph-only output extracts back to the same
//! plain text and takes the same route again.

pub mod heuristics;
pub mod wrap;

pub use heuristics::{has_substantive_markup, looks_like_markdown};
pub use wrap::wrap_paragraphs;

use crate::markup::{plain_text_of, serialize};
use crate::models::Document;
use crate::parsing::parse;

/// Which path stored content takes through the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Nothing to show.
    Empty,
    /// Already a structured document; returned as stored.
    Preserve,
    /// Plain text (extracted from the stored content) for the block parser.
    Markdown(String),
    /// Plain text to be wrapped into paragraphs as-is.
    PlainParagraphs(String),
}

/// Applies the decision table to stored content.
pub fn classify(raw: &str) -> Route {
    if raw.trim().is_empty() {
        return Route::Empty;
    }
    if has_substantive_markup(raw) {
        return Route::Preserve;
    }
    let plain = plain_text_of(raw);
    if plain.trim().is_empty() {
        Route::Empty
    } else if looks_like_markdown(&plain) {
        Route::Markdown(plain)
    } else {
        Route::PlainParagraphs(plain)
    }
}

/// Builds the document a non-preserved route stands for.
///
/// `None` for [`Route::Preserve`]: that content is kept as markup and is
/// read with [`read_markup`](crate::markup::read_markup) when a typed
/// view is needed.
pub fn route_document(route: &Route) -> Option<Document> {
    match route {
        Route::Empty => Some(Document::default()),
        Route::Preserve => None,
        Route::Markdown(plain) => Some(parse(plain)),
        Route::PlainParagraphs(plain) => Some(wrap_paragraphs(plain)),
    }
}

/// Load path: turns stored content into markup for the editing surface.
pub fn render_for_display(raw: &str) -> String {
    let route = classify(raw);
    log::debug!("render_for_display: {}", route_name(&route));
    match route_document(&route) {
        Some(doc) => serialize(&doc),
        None => raw.to_string(),
    }
}

/// Save path: same decisions as [`render_for_display`], output trimmed.
pub fn normalize_for_save(raw: &str) -> String {
    let route = classify(raw);
    log::debug!("normalize_for_save: {}", route_name(&route));
    match route_document(&route) {
        Some(doc) => serialize(&doc).trim().to_string(),
        None => raw.trim().to_string(),
    }
}

fn route_name(route: &Route) -> &'static str {
    match route {
        Route::Empty => "empty",
        Route::Preserve => "preserve",
        Route::Markdown(_) => "markdown",
        Route::PlainParagraphs(_) => "plain paragraphs",
    }
}
