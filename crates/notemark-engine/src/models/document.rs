/// Deepest heading level the markup vocabulary has (`<h6>`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// A structured document: an ordered sequence of blocks.
///
/// The empty document is the empty sequence, never a "null" document.
/// Documents are built fresh on every load and every save; they are never
/// diffed or merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A top-level structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// Always within `1..=MAX_HEADING_LEVEL`; use [`Block::heading`] to build one.
        level: u8,
        content: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    /// Quote contents. Quotes hold paragraphs only; nesting is not supported.
    Blockquote(Vec<Block>),
    List {
        ordered: bool,
        /// First item number of an ordered list (`1` for unordered lists).
        start: u64,
        items: Vec<ListItem>,
    },
    /// Verbatim code. The text is never inline-parsed.
    CodeBlock {
        info: Option<String>,
        text: String,
    },
    HorizontalRule,
}

impl Block {
    /// Builds a heading, clamping the level into `1..=6`.
    pub fn heading(level: usize, content: Vec<Inline>) -> Self {
        let level = level.clamp(1, MAX_HEADING_LEVEL as usize) as u8;
        Block::Heading { level, content }
    }

    pub fn unordered(items: Vec<ListItem>) -> Self {
        Block::List {
            ordered: false,
            start: 1,
            items,
        }
    }

    pub fn ordered(start: u64, items: Vec<ListItem>) -> Self {
        Block::List {
            ordered: true,
            start,
            items,
        }
    }

    /// Inline view of a block, for places where only a paragraph may live
    /// (inside a quote). Lines of multi-line blocks are joined by
    /// [`Inline::LineBreak`].
    pub fn to_inlines(&self) -> Vec<Inline> {
        fn joined(runs: impl Iterator<Item = Vec<Inline>>) -> Vec<Inline> {
            let mut inlines = vec![];
            for run in runs {
                if !inlines.is_empty() {
                    inlines.push(Inline::LineBreak);
                }
                inlines.extend(run);
            }
            inlines
        }

        match self {
            Block::Heading { content, .. } | Block::Paragraph(content) => content.clone(),
            Block::CodeBlock { text, .. } => vec![Inline::text(text.as_str())],
            Block::Blockquote(children) => joined(children.iter().map(Block::to_inlines)),
            Block::List { items, .. } => joined(items.iter().map(|i| i.content().to_vec())),
            Block::HorizontalRule => vec![],
        }
    }
}

/// One entry of a [`Block::List`].
///
/// Task-ness is decided once, when the `[ ]` / `[x]` marker is parsed, and
/// is never reinterpreted from the item's text afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Plain(Vec<Inline>),
    Task { checked: bool, content: Vec<Inline> },
}

impl ListItem {
    pub fn content(&self) -> &[Inline] {
        match self {
            ListItem::Plain(content) | ListItem::Task { content, .. } => content,
        }
    }

    pub fn is_task(&self) -> bool {
        matches!(self, ListItem::Task { .. })
    }
}

/// A formatting unit within a line of text.
///
/// `Code` and `Link` hold raw strings rather than nested inlines: their
/// contents can never carry further formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Code(String),
    Link { label: String, url: String },
    LineBreak,
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }
}

/// Canonical form of an inline run: adjacent text merged, empty text and
/// empty formatting dropped, trailing line breaks removed.
pub fn tidy_inlines(inlines: Vec<Inline>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::with_capacity(inlines.len());
    for inline in inlines {
        match (out.last_mut(), inline) {
            (_, Inline::Text(t)) if t.is_empty() => {}
            (_, Inline::Strong(c) | Inline::Emphasis(c) | Inline::Strikethrough(c))
                if c.is_empty() => {}
            (_, Inline::Code(code)) if code.is_empty() => {}
            (_, Inline::Link { label, .. }) if label.is_empty() => {}
            (Some(Inline::Text(prev)), Inline::Text(t)) => prev.push_str(&t),
            (_, inline) => out.push(inline),
        }
    }
    while matches!(out.last(), Some(Inline::LineBreak)) {
        out.pop();
    }
    out
}

/// Concatenates the visible text of a run of inlines, rendering line
/// breaks as `\n`.
pub fn inlines_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    push_inlines_text(inlines, &mut out);
    out
}

fn push_inlines_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(s) | Inline::Code(s) => out.push_str(s),
            Inline::Link { label, .. } => out.push_str(label),
            Inline::Strong(children)
            | Inline::Emphasis(children)
            | Inline::Strikethrough(children) => push_inlines_text(children, out),
            Inline::LineBreak => out.push('\n'),
        }
    }
}
