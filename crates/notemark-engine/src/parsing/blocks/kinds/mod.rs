pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceOpen};
pub use heading::AtxHeading;
pub use list::{ListMarker, TaskMarker};
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
