use crate::markup::{read_markup, serialize};
use crate::models::Document;
use crate::normalize::{classify, normalize_for_save, route_document};
use crate::parsing::blocks::kinds::{CodeFence, FenceKind};

use super::error::EditError;
use super::mode::DocumentMode;
use super::outcome::{Outcome, Promotion};
use super::rules::{self, BlockMatch, InlineKind};
use super::tree::{EditTree, NodeId, NodeKind};

/// Caret position: a byte offset into one text leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub node: NodeId,
    pub offset: usize,
}

/// One edit event from the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Char(char),
    LineBreak,
}

/// One open document: its live tree, its caret and its mode.
///
/// Events must be applied one at a time in the order they happened; every
/// promotion decision looks at the text exactly as the previous event
/// left it.
#[derive(Debug, Clone)]
pub struct EditSession {
    tree: EditTree,
    caret: Caret,
    mode: DocumentMode,
}

impl EditSession {
    /// Opens stored content, routed the same way as
    /// [`render_for_display`](crate::normalize::render_for_display).
    pub fn open(stored: &str, mode: DocumentMode) -> Self {
        let route = classify(stored);
        let doc = route_document(&route).unwrap_or_else(|| read_markup(stored));
        Self::from_document(&doc, mode)
    }

    /// Starts a session on `doc`, with the caret at the end of its last
    /// text. An empty paragraph is added when there is nowhere else to
    /// type.
    pub fn from_document(doc: &Document, mode: DocumentMode) -> Self {
        let mut tree = EditTree::from_document(doc);
        let node = trailing_leaf(&mut tree);
        let offset = tree.text(node).map_or(0, str::len);
        Self {
            tree,
            caret: Caret { node, offset },
            mode,
        }
    }

    pub fn tree(&self) -> &EditTree {
        &self.tree
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn mode(&self) -> DocumentMode {
        self.mode
    }

    /// Moves the caret. The node must be an attached text leaf and the
    /// offset a character boundary within it.
    pub fn set_caret(&mut self, caret: Caret) -> Result<(), EditError> {
        let Caret { node, offset } = caret;
        if !self.tree.contains(node) {
            return Err(EditError::UnknownNode(node));
        }
        if !self.tree.is_attached(node) {
            return Err(EditError::Detached(node));
        }
        let Some(text) = self.tree.text(node) else {
            return Err(EditError::NotText(node));
        };
        if offset > text.len() {
            return Err(EditError::OffsetOutOfRange {
                offset,
                len: text.len(),
            });
        }
        if !text.is_char_boundary(offset) {
            return Err(EditError::NotCharBoundary(offset));
        }
        self.caret = caret;
        Ok(())
    }

    pub fn set_checkbox_mode(&mut self, on: bool) {
        log::debug!("checkbox mode {}", if on { "on" } else { "off" });
        self.mode.checkbox_mode = on;
    }

    pub fn apply(&mut self, edit: Edit) -> Outcome {
        match edit {
            Edit::Char(c) => self.insert_char(c),
            Edit::LineBreak => self.insert_line_break(),
        }
    }

    /// Types `text` one character at a time; `\n` is a line break.
    pub fn insert_text(&mut self, text: &str) -> Vec<Outcome> {
        text.chars().map(|c| self.insert_char(c)).collect()
    }

    /// Inserts `c` at the caret, then tries inline promotion when `c` can
    /// close a span.
    pub fn insert_char(&mut self, c: char) -> Outcome {
        if c == '\n' {
            return self.insert_line_break();
        }
        if c.is_control() && c != '\t' {
            log::trace!("ignored control character {c:?}");
            return Outcome::Ignored;
        }

        let Caret { node, offset } = self.caret;
        let Some(text) = self.tree.text_mut(node) else {
            return Outcome::Ignored;
        };
        text.insert(offset, c);
        self.caret.offset += c.len_utf8();

        if self.mode.inline_promotion
            && rules::is_trigger(c)
            && let Some(promotion) = self.promote_inline()
        {
            log::debug!("inline promotion: {promotion:?}");
            return Outcome::Promoted(promotion);
        }
        Outcome::Inserted
    }

    /// Handles a line break: block promotion when the line allows it,
    /// otherwise the structural default for where the caret is.
    pub fn insert_line_break(&mut self) -> Outcome {
        if self.mode.block_promotion
            && let Some(promotion) = self.promote_block()
        {
            log::debug!("block promotion: {promotion:?}");
            return Outcome::Promoted(promotion);
        }

        let Some(line) = self.tree.line_of(self.caret.node) else {
            return Outcome::Ignored;
        };
        match self.tree.kind(line).cloned() {
            Some(NodeKind::CodeBlock { fence, .. }) => self.break_in_code(line, fence),
            Some(NodeKind::ListItem { task }) => self.break_in_item(line, task),
            Some(NodeKind::Paragraph) if self.in_quote(line) && self.is_blank(line) => {
                self.exit_container(line, Promotion::QuoteExited)
            }
            Some(_) => {
                self.split_line(line, NodeKind::Paragraph);
                Outcome::Inserted
            }
            None => Outcome::Ignored,
        }
    }

    /// Flips a task item's checkbox; returns the new state.
    pub fn toggle_task(&mut self, item: NodeId) -> Result<bool, EditError> {
        if !self.tree.contains(item) {
            return Err(EditError::UnknownNode(item));
        }
        if !self.tree.is_attached(item) {
            return Err(EditError::Detached(item));
        }
        let Some(NodeKind::ListItem {
            task: Some(checked),
        }) = self.tree.kind(item).cloned()
        else {
            return Err(EditError::NotTaskItem(item));
        };
        self.tree.set_kind(item, NodeKind::ListItem {
            task: Some(!checked),
        });
        log::debug!("task {item:?} checked: {}", !checked);
        Ok(!checked)
    }

    pub fn document(&self) -> Document {
        self.tree.to_document()
    }

    pub fn serialize(&self) -> String {
        serialize(&self.document())
    }

    /// What the save path stores for this session.
    pub fn save_markup(&self) -> String {
        normalize_for_save(&self.serialize())
    }

    /// The caret's line, when the caret sits at the end of a text leaf
    /// that is the only content of that line. Code blocks never qualify.
    fn simple_line(&self) -> Option<NodeId> {
        let Caret { node, offset } = self.caret;
        let line = self.tree.parent(node)?;
        let simple = matches!(
            self.tree.kind(line)?,
            NodeKind::Paragraph | NodeKind::Heading(_) | NodeKind::ListItem { .. }
        ) && self.tree.children(line) == [node].as_slice()
            && self.tree.text(node)?.len() == offset;
        if !simple {
            log::trace!("caret line is not a simple line");
        }
        simple.then_some(line)
    }

    fn promote_inline(&mut self) -> Option<Promotion> {
        let line = self.simple_line()?;
        let leaf = self.caret.node;
        let text = self.tree.text(leaf)?.to_string();
        let found = rules::match_at_end(&text)?;

        let (kind, promotion) = match found.kind {
            InlineKind::Strong => (NodeKind::Strong, Promotion::Strong),
            InlineKind::Strikethrough => (NodeKind::Strikethrough, Promotion::Strikethrough),
            InlineKind::Code => (NodeKind::Code, Promotion::Code),
            InlineKind::Emphasis => (NodeKind::Emphasis, Promotion::Emphasis),
        };
        let node = self.tree.alloc(kind);
        let inner = self.tree.alloc(NodeKind::Text(text[found.inner].to_string()));
        self.tree.append(node, inner);
        let after = self.tree.alloc(NodeKind::Text(String::new()));

        let mut children = Vec::with_capacity(3);
        let prefix = &text[..found.span.start];
        if !prefix.is_empty() {
            self.set_text(leaf, prefix.to_string());
            children.push(leaf);
        }
        children.extend([node, after]);
        self.tree.set_children(line, children);
        self.caret = Caret {
            node: after,
            offset: 0,
        };
        Some(promotion)
    }

    /// Block promotion applies to simple top-level paragraphs only.
    fn promote_block(&mut self) -> Option<Promotion> {
        let line = self.simple_line()?;
        let root = self.tree.root();
        if self.tree.kind(line) != Some(&NodeKind::Paragraph) || self.tree.parent(line) != Some(root)
        {
            return None;
        }
        let leaf = self.caret.node;
        let found = rules::match_line(self.tree.text(leaf)?)?;

        let promotion = match found {
            BlockMatch::Heading { level, text } => {
                self.tree.set_kind(line, NodeKind::Heading(level));
                self.set_text(leaf, text);
                self.open_paragraph_after(line);
                Promotion::Heading(level)
            }
            BlockMatch::Quote(text) => {
                self.set_text(leaf, text);
                let quote = match self.tree.previous_sibling(line) {
                    Some(prev) if self.tree.kind(prev) == Some(&NodeKind::Blockquote) => prev,
                    _ => {
                        let quote = self.tree.alloc(NodeKind::Blockquote);
                        self.tree.insert_after(line, quote);
                        quote
                    }
                };
                self.tree.append(quote, line);
                self.open_paragraph_after(quote);
                Promotion::Blockquote
            }
            BlockMatch::Item {
                ordered,
                start,
                task,
                text,
            } => {
                let task = task.or((self.mode.checkbox_mode && !ordered).then_some(false));
                let empty = text.is_empty();
                self.set_text(leaf, text);
                self.tree.set_kind(line, NodeKind::ListItem { task });

                let list = match self.tree.previous_sibling(line) {
                    Some(prev)
                        if matches!(
                            self.tree.kind(prev),
                            Some(NodeKind::List { ordered: o, .. }) if *o == ordered
                        ) =>
                    {
                        prev
                    }
                    _ => {
                        let list = self.tree.alloc(NodeKind::List { ordered, start });
                        self.tree.insert_after(line, list);
                        list
                    }
                };
                self.tree.append(list, line);

                if empty {
                    self.caret = Caret {
                        node: leaf,
                        offset: 0,
                    };
                } else {
                    let next_task = task.map(|_| false);
                    let (next, next_leaf) =
                        self.tree.new_line(NodeKind::ListItem { task: next_task }, "");
                    self.tree.insert_after(line, next);
                    self.caret = Caret {
                        node: next_leaf,
                        offset: 0,
                    };
                }
                Promotion::ListItem {
                    ordered,
                    task: task.is_some(),
                }
            }
            BlockMatch::Rule => {
                self.tree.set_kind(line, NodeKind::HorizontalRule);
                self.tree.set_children(line, vec![]);
                self.open_paragraph_after(line);
                Promotion::HorizontalRule
            }
            BlockMatch::Fence { kind, info } => {
                self.tree.set_kind(line, NodeKind::CodeBlock { info, fence: kind });
                self.set_text(leaf, String::new());
                self.caret = Caret {
                    node: leaf,
                    offset: 0,
                };
                Promotion::CodeBlock
            }
        };
        Some(promotion)
    }

    /// Inside code a line break is text, except that a fence of the kind
    /// that opened the block, typed as its last line, ends the block.
    fn break_in_code(&mut self, code: NodeId, fence: FenceKind) -> Outcome {
        let Caret { node, offset } = self.caret;
        let Some(text) = self.tree.text_mut(node) else {
            return Outcome::Ignored;
        };
        let last_line = text.rfind('\n').map_or(0, |i| i + 1);
        let closing = offset == text.len() && CodeFence::closes(fence, &text[last_line..]);
        if !closing {
            text.insert(offset, '\n');
            self.caret.offset += 1;
            return Outcome::Inserted;
        }

        text.truncate(last_line.saturating_sub(1));
        self.open_paragraph_after(code);
        log::debug!("code block closed");
        Outcome::Promoted(Promotion::CodeBlockClosed)
    }

    fn break_in_item(&mut self, item: NodeId, task: Option<bool>) -> Outcome {
        if self.is_blank(item) {
            return self.exit_container(item, Promotion::ListExited);
        }
        let ordered = self.tree.parent(item).is_some_and(|list| {
            matches!(
                self.tree.kind(list),
                Some(NodeKind::List { ordered: true, .. })
            )
        });
        let task = (task.is_some() || (self.mode.checkbox_mode && !ordered)).then_some(false);
        self.split_line(item, NodeKind::ListItem { task });
        log::debug!("list continued");
        Outcome::Promoted(Promotion::ListContinued)
    }

    /// Splits `line` at the caret; the part after it becomes a new line of
    /// `kind` right below, with the caret at its start.
    fn split_line(&mut self, line: NodeId, kind: NodeKind) -> NodeId {
        let Caret { node, offset } = self.caret;
        let tail = self.tree.split_at(line, node, offset);
        self.tree.set_kind(tail, kind);
        self.tree.ensure_text(line);
        self.tree.ensure_text(tail);
        self.tree.insert_after(line, tail);
        if let Some(leaf) = self.tree.first_text_leaf(tail) {
            self.caret = Caret {
                node: leaf,
                offset: 0,
            };
        }
        tail
    }

    /// Removes the empty `line` from its list or quote and continues in a
    /// fresh paragraph right after the container. Lines that followed it
    /// move into a second container after the paragraph; an ordered rest
    /// keeps numbering on from the kept items.
    fn exit_container(&mut self, line: NodeId, promotion: Promotion) -> Outcome {
        let Some(container) = self.tree.parent(line) else {
            return Outcome::Ignored;
        };
        let rest = self.tree.split_children_after(container, line);
        self.tree.detach(line);

        if let Some(rest) = rest
            && let Some(NodeKind::List {
                ordered: true,
                start,
            }) = self.tree.kind(container).cloned()
        {
            let kept = self.tree.children(container).len() as u64;
            self.tree.set_kind(rest, NodeKind::List {
                ordered: true,
                start: start + kept,
            });
        }

        let paragraph = self.open_paragraph_after(container);
        if let Some(rest) = rest {
            self.tree.insert_after(paragraph, rest);
        }
        if self.tree.children(container).is_empty() {
            self.tree.detach(container);
        }
        log::debug!("left {promotion:?}");
        Outcome::Promoted(promotion)
    }

    /// Inserts an empty paragraph after `node` and puts the caret in it.
    fn open_paragraph_after(&mut self, node: NodeId) -> NodeId {
        let (line, leaf) = self.tree.new_line(NodeKind::Paragraph, "");
        self.tree.insert_after(node, line);
        self.caret = Caret {
            node: leaf,
            offset: 0,
        };
        line
    }

    fn set_text(&mut self, leaf: NodeId, text: String) {
        if let Some(slot) = self.tree.text_mut(leaf) {
            *slot = text;
        }
    }

    fn in_quote(&self, line: NodeId) -> bool {
        self.tree
            .parent(line)
            .is_some_and(|p| self.tree.kind(p) == Some(&NodeKind::Blockquote))
    }

    fn is_blank(&self, line: NodeId) -> bool {
        self.tree.plain_text(line).trim().is_empty()
    }
}

fn trailing_leaf(tree: &mut EditTree) -> NodeId {
    let root = tree.root();
    if let Some(&last) = tree.children(root).last()
        && let Some(leaf) = tree.last_text_leaf(last)
    {
        return leaf;
    }
    let (line, leaf) = tree.new_line(NodeKind::Paragraph, "");
    tree.append(root, line);
    leaf
}
