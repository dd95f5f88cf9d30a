//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` - raw zone, frozen first
//! - **`BracketLink`**: `[label](url)` with an allowed scheme
//! - **`Strong`**, **`Strikethrough`**, **`Emphasis`**: `**`/`__`, `~~`, `*`/`_`
//!
//! The parser and the live conversion engine both ask these types for
//! delimiters; neither hardcodes them.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, EmphasisMatch, Strikethrough, Strong};
pub use link::BracketLink;
