//! Structural checks over a session, for tests and debugging.

use super::session::EditSession;
use super::tree::{EditTree, NodeId, NodeKind};

/// Checks the tree and caret of `session`, describing the first
/// violation found:
///
/// - parent and child links agree, and no node is listed twice
/// - every node sits in a parent that may hold it
/// - code blocks, code spans and links hold exactly one text leaf
/// - lists and quotes are not empty, and every line has a text leaf
/// - the caret is on an attached text leaf, on a character boundary
pub fn check(session: &EditSession) -> Result<(), String> {
    let tree = session.tree();
    check_node(tree, tree.root())?;

    let caret = session.caret();
    if !tree.is_attached(caret.node) {
        return Err(format!("caret is on detached node {:?}", caret.node));
    }
    let Some(text) = tree.text(caret.node) else {
        return Err(format!("caret is on non-text node {:?}", caret.node));
    };
    if caret.offset > text.len() || !text.is_char_boundary(caret.offset) {
        return Err(format!("caret offset {} is invalid in {text:?}", caret.offset));
    }
    Ok(())
}

fn check_node(tree: &EditTree, id: NodeId) -> Result<(), String> {
    let Some(kind) = tree.kind(id) else {
        return Err(format!("{id:?} does not exist"));
    };
    let children = tree.children(id);

    let mut seen = children.to_vec();
    seen.sort();
    seen.dedup();
    if seen.len() != children.len() {
        return Err(format!("{id:?} lists a child twice"));
    }

    for &child in children {
        if tree.parent(child) != Some(id) {
            return Err(format!(
                "{child:?} is listed under {id:?} but its parent is {:?}",
                tree.parent(child)
            ));
        }
        let Some(child_kind) = tree.kind(child) else {
            return Err(format!("{child:?} does not exist"));
        };
        if !may_hold(kind, child_kind) {
            return Err(format!("{child_kind:?} cannot sit inside {kind:?}"));
        }
        check_node(tree, child)?;
    }

    if kind.holds_raw_text()
        && !(children.len() == 1 && tree.text(children[0]).is_some())
    {
        return Err(format!("{kind:?} must hold exactly one text leaf"));
    }
    if matches!(kind, NodeKind::List { .. } | NodeKind::Blockquote) && children.is_empty() {
        return Err(format!("empty {kind:?}"));
    }
    if kind.is_line() && tree.first_text_leaf(id).is_none() {
        return Err(format!("line {id:?} has no text leaf"));
    }
    Ok(())
}

fn may_hold(parent: &NodeKind, child: &NodeKind) -> bool {
    match parent {
        NodeKind::Root => child.is_block(),
        NodeKind::Blockquote => *child == NodeKind::Paragraph,
        NodeKind::List { .. } => matches!(child, NodeKind::ListItem { .. }),
        NodeKind::Paragraph
        | NodeKind::Heading(_)
        | NodeKind::ListItem { .. }
        | NodeKind::Strong
        | NodeKind::Emphasis
        | NodeKind::Strikethrough => child.is_inline(),
        NodeKind::CodeBlock { .. } | NodeKind::Code | NodeKind::Link { .. } => {
            matches!(child, NodeKind::Text(_))
        }
        NodeKind::Text(_) | NodeKind::LineBreak | NodeKind::HorizontalRule => false,
    }
}
