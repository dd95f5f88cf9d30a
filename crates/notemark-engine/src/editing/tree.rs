use crate::models::{Block, Document, Inline, ListItem, tidy_inlines};
use crate::parsing::blocks::kinds::FenceKind;

/// Handle to a node of an [`EditTree`].
///
/// Ids are indices into the arena and are never reused, so a handle to a
/// node that has been detached stays invalid rather than aliasing a new
/// node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node is. Mirrors [`Block`] and [`Inline`], plus the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading(u8),
    Blockquote,
    List { ordered: bool, start: u64 },
    /// `task` is `Some(checked)` for checkbox items.
    ListItem { task: Option<bool> },
    /// Holds a single text leaf with the verbatim code. `fence` is the
    /// fence kind that opened it; only the same kind closes it.
    CodeBlock {
        info: Option<String>,
        fence: FenceKind,
    },
    HorizontalRule,
    Text(String),
    Strong,
    Emphasis,
    Strikethrough,
    /// Holds a single text leaf.
    Code,
    /// Holds a single text leaf with the label.
    Link { url: String },
    LineBreak,
}

impl NodeKind {
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph
                | NodeKind::Heading(_)
                | NodeKind::Blockquote
                | NodeKind::List { .. }
                | NodeKind::CodeBlock { .. }
                | NodeKind::HorizontalRule
        )
    }

    /// Nodes that hold one line of inline content.
    pub fn is_line(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph
                | NodeKind::Heading(_)
                | NodeKind::ListItem { .. }
                | NodeKind::CodeBlock { .. }
        )
    }

    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeKind::Text(_)
                | NodeKind::Strong
                | NodeKind::Emphasis
                | NodeKind::Strikethrough
                | NodeKind::Code
                | NodeKind::Link { .. }
                | NodeKind::LineBreak
        )
    }

    /// Nodes whose only child is a single raw text leaf.
    pub fn holds_raw_text(&self) -> bool {
        matches!(
            self,
            NodeKind::CodeBlock { .. } | NodeKind::Code | NodeKind::Link { .. }
        )
    }
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The live document of an editing session: an arena of nodes addressed
/// by [`NodeId`].
///
/// Structural edits detach nodes instead of freeing them; only nodes
/// reachable from the root are part of the document.
#[derive(Debug, Clone)]
pub struct EditTree {
    nodes: Vec<Node>,
}

const ROOT: NodeId = NodeId(0);

impl Default for EditTree {
    fn default() -> Self {
        Self::new()
    }
}

impl EditTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                parent: None,
                children: vec![],
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|n| &n.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Text of a text leaf.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub(crate) fn text_mut(&mut self, id: NodeId) -> Option<&mut String> {
        match &mut self.nodes.get_mut(id.0)?.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// True when `id` is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == ROOT {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// The line (paragraph, heading, list item or code block) holding `id`.
    pub fn line_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.kind(node)?.is_line() {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.index_in_parent(id)?;
        index
            .checked_sub(1)
            .and_then(|i| self.children(parent).get(i).copied())
    }

    /// First text leaf under `id` (or `id` itself), in document order.
    pub fn first_text_leaf(&self, id: NodeId) -> Option<NodeId> {
        if self.text(id).is_some() {
            return Some(id);
        }
        self.children(id)
            .iter()
            .find_map(|&child| self.first_text_leaf(child))
    }

    /// Last text leaf under `id` (or `id` itself), in document order.
    pub fn last_text_leaf(&self, id: NodeId) -> Option<NodeId> {
        if self.text(id).is_some() {
            return Some(id);
        }
        self.children(id)
            .iter()
            .rev()
            .find_map(|&child| self.last_text_leaf(child))
    }

    /// All attached text leaves in document order.
    pub fn text_leaves(&self) -> Vec<NodeId> {
        let mut out = vec![];
        self.collect(
            ROOT,
            &mut |tree: &Self, id| tree.text(id).is_some(),
            &mut out,
        );
        out
    }

    /// All attached checkbox list items in document order.
    pub fn task_items(&self) -> Vec<NodeId> {
        let mut out = vec![];
        self.collect(
            ROOT,
            &mut |tree: &Self, id| {
                matches!(tree.kind(id), Some(NodeKind::ListItem { task: Some(_) }))
            },
            &mut out,
        );
        out
    }

    fn collect(
        &self,
        id: NodeId,
        wanted: &mut impl FnMut(&Self, NodeId) -> bool,
        out: &mut Vec<NodeId>,
    ) {
        if wanted(self, id) {
            out.push(id);
        }
        for &child in self.children(id) {
            self.collect(child, wanted, out);
        }
    }

    /// Concatenated text under `id`; line breaks read as `\n`.
    pub fn plain_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.push_plain_text(id, &mut out);
        out
    }

    fn push_plain_text(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            Some(NodeKind::Text(text)) => out.push_str(text),
            Some(NodeKind::LineBreak) => out.push('\n'),
            _ => {
                for &child in self.children(id) {
                    self.push_plain_text(child, out);
                }
            }
        }
    }

    pub(crate) fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: vec![],
        });
        id
    }

    /// Allocates a detached line of `kind` holding one text leaf; returns
    /// the line and the leaf.
    pub(crate) fn new_line(&mut self, kind: NodeKind, text: &str) -> (NodeId, NodeId) {
        let line = self.alloc(kind);
        let leaf = self.alloc(NodeKind::Text(text.to_string()));
        self.append(line, leaf);
        (line, leaf)
    }

    pub(crate) fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.kind = kind;
        }
    }

    pub(crate) fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub(crate) fn insert_after(&mut self, sibling: NodeId, node: NodeId) {
        let (Some(parent), Some(index)) = (self.parent(sibling), self.index_in_parent(sibling))
        else {
            return;
        };
        self.detach(node);
        self.nodes[node.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(index + 1, node);
    }

    pub(crate) fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// Replaces every child of `parent` with `children`.
    pub(crate) fn set_children(&mut self, parent: NodeId, children: Vec<NodeId>) {
        for old in std::mem::take(&mut self.nodes[parent.0].children) {
            self.nodes[old.0].parent = None;
        }
        for child in children {
            self.append(parent, child);
        }
    }

    /// Gives a line without any text leaf an empty one, so a caret can sit
    /// in it.
    pub(crate) fn ensure_text(&mut self, line: NodeId) {
        if self.first_text_leaf(line).is_none() {
            let leaf = self.alloc(NodeKind::Text(String::new()));
            self.nodes[leaf.0].parent = Some(line);
            self.nodes[line.0].children.insert(0, leaf);
        }
    }

    /// Splits `node` at byte `offset` of its descendant text leaf `leaf`.
    ///
    /// `node` keeps everything before the split point. The returned node is
    /// detached, of the same kind, and holds everything after it; its first
    /// text leaf is the right half of `leaf`. Inline ancestors between
    /// `node` and `leaf` are split the same way.
    pub(crate) fn split_at(&mut self, node: NodeId, leaf: NodeId, offset: usize) -> NodeId {
        if node == leaf {
            let tail = match self.text_mut(leaf) {
                Some(text) if text.is_char_boundary(offset) => text.split_off(offset),
                _ => String::new(),
            };
            return self.alloc(NodeKind::Text(tail));
        }

        let kind = self.nodes[node.0].kind.clone();
        let children = self.children(node).to_vec();
        let clone = self.alloc(kind);
        let Some(index) = children
            .iter()
            .position(|&c| c == leaf || self.is_ancestor(c, leaf))
        else {
            return clone;
        };

        let right = self.split_at(children[index], leaf, offset);
        self.append(clone, right);
        for &moved in &children[index + 1..] {
            self.append(clone, moved);
        }
        clone
    }

    /// Moves the children of `container` that follow `child` into a new
    /// detached container of the same kind. `None` when nothing follows.
    pub(crate) fn split_children_after(
        &mut self,
        container: NodeId,
        child: NodeId,
    ) -> Option<NodeId> {
        let children = self.children(container).to_vec();
        let index = children.iter().position(|&c| c == child)?;
        let rest = &children[index + 1..];
        if rest.is_empty() {
            return None;
        }
        let clone = self.alloc(self.nodes[container.0].kind.clone());
        for &moved in rest {
            self.append(clone, moved);
        }
        Some(clone)
    }

    /// Builds a tree holding `doc`. Every line gets at least one text leaf;
    /// empty lists and quotes are left out.
    pub fn from_document(doc: &Document) -> Self {
        let mut tree = Self::new();
        for block in &doc.blocks {
            let id = tree.build_block(block);
            let empty_container = matches!(
                tree.kind(id),
                Some(NodeKind::Blockquote | NodeKind::List { .. })
            ) && tree.children(id).is_empty();
            if !empty_container {
                tree.append(ROOT, id);
            }
        }
        tree
    }

    fn build_block(&mut self, block: &Block) -> NodeId {
        match block {
            Block::Heading { level, content } => self.build_line(NodeKind::Heading(*level), content),
            Block::Paragraph(content) => self.build_line(NodeKind::Paragraph, content),
            Block::Blockquote(children) => {
                let quote = self.alloc(NodeKind::Blockquote);
                for child in children {
                    let paragraph = match child {
                        Block::Paragraph(content) => self.build_line(NodeKind::Paragraph, content),
                        other => self.build_line(NodeKind::Paragraph, &other.to_inlines()),
                    };
                    self.append(quote, paragraph);
                }
                quote
            }
            Block::List {
                ordered,
                start,
                items,
            } => {
                let list = self.alloc(NodeKind::List {
                    ordered: *ordered,
                    start: *start,
                });
                for item in items {
                    let task = match item {
                        ListItem::Plain(_) => None,
                        ListItem::Task { checked, .. } => Some(*checked),
                    };
                    let item = self.build_line(NodeKind::ListItem { task }, item.content());
                    self.append(list, item);
                }
                list
            }
            Block::CodeBlock { info, text } => {
                let kind = NodeKind::CodeBlock {
                    info: info.clone(),
                    fence: FenceKind::Backticks,
                };
                let (code, _) = self.new_line(kind, text);
                code
            }
            Block::HorizontalRule => self.alloc(NodeKind::HorizontalRule),
        }
    }

    fn build_line(&mut self, kind: NodeKind, content: &[Inline]) -> NodeId {
        let line = self.alloc(kind);
        for inline in content {
            let child = self.build_inline(inline);
            self.append(line, child);
        }
        self.ensure_text(line);
        line
    }

    fn build_inline(&mut self, inline: &Inline) -> NodeId {
        let (kind, children) = match inline {
            Inline::Text(text) => return self.alloc(NodeKind::Text(text.clone())),
            Inline::LineBreak => return self.alloc(NodeKind::LineBreak),
            Inline::Code(code) => return self.new_line(NodeKind::Code, code).0,
            Inline::Link { label, url } => {
                return self.new_line(NodeKind::Link { url: url.clone() }, label).0;
            }
            Inline::Strong(children) => (NodeKind::Strong, children),
            Inline::Emphasis(children) => (NodeKind::Emphasis, children),
            Inline::Strikethrough(children) => (NodeKind::Strikethrough, children),
        };
        let node = self.alloc(kind);
        for child in children {
            let child = self.build_inline(child);
            self.append(node, child);
        }
        node
    }

    /// Lowers the tree to a [`Document`]: empty text and empty formatting
    /// are dropped, adjacent text is merged, and empty paragraphs, items,
    /// lists and quotes disappear.
    pub fn to_document(&self) -> Document {
        Document::new(
            self.children(ROOT)
                .iter()
                .filter_map(|&id| self.lower_block(id))
                .collect(),
        )
    }

    fn lower_block(&self, id: NodeId) -> Option<Block> {
        match self.kind(id)? {
            NodeKind::Paragraph => {
                let content = self.lower_inlines(id);
                (!content.is_empty()).then_some(Block::Paragraph(content))
            }
            NodeKind::Heading(level) => {
                Some(Block::heading(*level as usize, self.lower_inlines(id)))
            }
            NodeKind::Blockquote => {
                let children: Vec<Block> = self
                    .children(id)
                    .iter()
                    .filter_map(|&c| self.lower_block(c))
                    .collect();
                (!children.is_empty()).then_some(Block::Blockquote(children))
            }
            NodeKind::List { ordered, start } => {
                let items: Vec<ListItem> = self
                    .children(id)
                    .iter()
                    .filter_map(|&c| self.lower_item(c))
                    .collect();
                (!items.is_empty()).then_some(Block::List {
                    ordered: *ordered,
                    start: *start,
                    items,
                })
            }
            NodeKind::CodeBlock { info, .. } => Some(Block::CodeBlock {
                info: info.clone(),
                text: self.plain_text(id),
            }),
            NodeKind::HorizontalRule => Some(Block::HorizontalRule),
            _ => None,
        }
    }

    fn lower_item(&self, id: NodeId) -> Option<ListItem> {
        let NodeKind::ListItem { task } = self.kind(id)? else {
            return None;
        };
        let content = self.lower_inlines(id);
        if content.is_empty() {
            return None;
        }
        Some(match task {
            Some(checked) => ListItem::Task {
                checked: *checked,
                content,
            },
            None => ListItem::Plain(content),
        })
    }

    fn lower_inlines(&self, id: NodeId) -> Vec<Inline> {
        tidy_inlines(
            self.children(id)
                .iter()
                .filter_map(|&c| self.lower_inline(c))
                .collect(),
        )
    }

    fn lower_inline(&self, id: NodeId) -> Option<Inline> {
        Some(match self.kind(id)? {
            NodeKind::Text(text) => Inline::Text(text.clone()),
            NodeKind::Strong => Inline::Strong(self.lower_inlines(id)),
            NodeKind::Emphasis => Inline::Emphasis(self.lower_inlines(id)),
            NodeKind::Strikethrough => Inline::Strikethrough(self.lower_inlines(id)),
            NodeKind::Code => Inline::Code(self.plain_text(id)),
            NodeKind::Link { url } => Inline::Link {
                label: self.plain_text(id),
                url: url.clone(),
            },
            NodeKind::LineBreak => Inline::LineBreak,
            _ => return None,
        })
    }
}
