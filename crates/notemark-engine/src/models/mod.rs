pub mod document;

pub use document::{
    Block, Document, Inline, ListItem, MAX_HEADING_LEVEL, inlines_text, tidy_inlines,
};
