pub mod editing;
pub mod markup;
pub mod models;
pub mod normalize;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{Caret, DocumentMode, Edit, EditError, EditSession, Outcome, Promotion};
pub use markup::{plain_text_of, read_markup, serialize};
pub use models::{Block, Document, Inline, ListItem};
pub use normalize::{Route, classify, normalize_for_save, render_for_display};
pub use parsing::{parse, render_inline, render_markdown};
