/*!
 * # Editing
 *
 * The incremental conversion engine: reacts to edit events from the
 * editing surface and turns freshly typed markdown into structure.
 *
 * ## Architecture
 *
 * ### 1. Arena tree
 * - An open document lives in an [`EditTree`]: nodes in an arena,
 *   addressed by [`NodeId`], each with a closed [`NodeKind`]
 * - Built from a [`Document`](crate::models::Document) and lowered back
 *   to one for saving; nothing holds references into the tree
 *
 * ### 2. Explicit session state
 * - An [`EditSession`] owns one tree, one [`Caret`] and one
 *   [`DocumentMode`]; modes such as checkbox mode are per document
 * - The caret is an offset into a single text leaf and is recomputed
 *   after every structural change
 *
 * ### 3. Promotion
 * - **Inline** (trigger `*`, `_`, `~`, `` ` ``): a delimiter pair that ends
 *   at the caret becomes strong, strikethrough, code or emphasis
 * - **Block** (trigger: line break): a paragraph line that reads as a
 *   heading, quote, list item, rule or fence becomes that block
 * - Both apply only on a *simple line*: the caret at the end of a text
 *   leaf that is the whole line. Anything else is left as typed
 *
 * ## Module Structure
 *
 * - **`tree`**: `EditTree`, `NodeId`, `NodeKind`
 * - **`session`**: `EditSession`, `Caret`, `Edit`
 * - **`rules`**: pattern tests for inline and block promotion
 * - **`outcome`**: `Outcome` / `Promotion` reported per event
 * - **`mode`**: `DocumentMode`, built from the editor config
 * - **`invariants`**: structural checks used by tests
 *
 * ## Usage Pattern
 *
 * ```rust
 * use notemark_engine::editing::{DocumentMode, EditSession, Outcome, Promotion};
 *
 * let mut session = EditSession::open("", DocumentMode::default());
 * session.insert_text("# Groceries");
 * assert_eq!(
 *     session.insert_line_break(),
 *     Outcome::Promoted(Promotion::Heading(1))
 * );
 * session.insert_text("buy **milk**");
 * assert_eq!(
 *     session.serialize(),
 *     "<h1>Groceries</h1><p>buy <strong>milk</strong></p>"
 * );
 * ```
 */

pub mod error;
pub mod invariants;
pub mod mode;
pub mod outcome;
pub mod rules;
pub mod session;
pub mod tree;

#[cfg(test)]
mod tests;

pub use error::EditError;
pub use mode::DocumentMode;
pub use outcome::{Outcome, Promotion};
pub use session::{Caret, Edit, EditSession};
pub use tree::{EditTree, NodeId, NodeKind};
