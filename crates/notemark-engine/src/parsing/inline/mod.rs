//! # Inline Parsing
//!
//! Turns one line of raw text into [`Inline`](crate::models::Inline) nodes.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the content
//! of inline-eligible blocks (paragraph lines, headings, quote lines, list
//! item text). Fenced code never reaches it.
//!
//! The parser runs ordered regex passes over a working copy of the line.
//! Each resolved span is frozen behind a placeholder token so that later
//! passes cannot re-scan it:
//! - Code spans are frozen first ("raw zones")
//! - Bracket links next, so their labels and URLs stay untouched
//! - Then strong, strikethrough and single emphasis
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`placeholder`**: `Placeholders`, the freeze/thaw token store
//! - **`parser`**: `parse_inline()` main entry point

pub mod kinds;
pub mod parser;
pub mod placeholder;

pub use parser::parse_inline;
pub use placeholder::Placeholders;
