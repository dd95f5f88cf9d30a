//! Pattern tests behind promotion. Pure functions over the text of one
//! line; the session decides whether and where to apply them.

pub mod block;
pub mod inline;

pub use block::{BlockMatch, match_line};
pub use inline::{InlineKind, InlineMatch, is_trigger, match_at_end};
