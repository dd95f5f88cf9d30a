//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineClass` from local facts only (blank, fence, heading, rule, quote,
//!    list item, text), first match wins
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps the one
//!    open block (paragraph, fence, quote or list) and emits `Block`s as
//!    blocks open and close
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (AtxHeading,
//!   BlockQuote, CodeFence, ListMarker, TaskMarker, ThematicBreak, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - The builder never rejects input: unclassifiable lines are paragraph text
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Quotes do not nest; their lines are inline-parsed, not block-parsed
//! - Task-ness of a list item is fixed when its line is opened

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
