use crate::models::{Block, Inline, ListItem};
use crate::parsing::inline::parse_inline;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, FenceKind, ListMarker, TaskMarker},
};

/// An item being accumulated: task state plus its text lines.
#[derive(Debug)]
struct OpenItem {
    task: Option<bool>,
    lines: Vec<String>,
}

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<String>,
    },
    Fence {
        kind: FenceKind,
        info: Option<String>,
        lines: Vec<String>,
    },
    Quote {
        paragraphs: Vec<Vec<String>>,
    },
    List {
        marker: ListMarker,
        items: Vec<OpenItem>,
    },
}

/// Phase 2 of block parsing: a state machine fed one line at a time that
/// emits [`Block`]s as blocks open and close.
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        if let LeafState::Fence { kind, lines, .. } = &mut self.leaf {
            if CodeFence::closes(*kind, line) {
                self.flush();
            } else {
                lines.push(line.to_string());
            }
            return;
        }

        let class = self.classifier.classify(line);
        if self.continue_leaf(&class) {
            return;
        }
        self.flush();
        self.open(class);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush; an unterminated fence still becomes a code block.
        self.flush();
        self.out
    }

    /// Feeds `class` to the open leaf. Returns false when the line does not
    /// belong to it.
    fn continue_leaf(&mut self, class: &LineClass<'_>) -> bool {
        match (&mut self.leaf, class) {
            (LeafState::Paragraph { lines }, LineClass::Text(text)) => {
                lines.push(text.to_string());
                true
            }
            (LeafState::Quote { paragraphs }, LineClass::Quote(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    // Blank quote lines separate paragraphs; runs collapse.
                    if paragraphs.last().is_some_and(|p| !p.is_empty()) {
                        paragraphs.push(vec![]);
                    }
                } else if let Some(current) = paragraphs.last_mut() {
                    current.push(text.to_string());
                } else {
                    paragraphs.push(vec![text.to_string()]);
                }
                true
            }
            (LeafState::List { marker, items }, LineClass::Item { marker: next, text })
                if marker.same_family(*next) =>
            {
                items.push(open_item(text));
                true
            }
            (LeafState::List { items, .. }, LineClass::Text(text)) => {
                if let Some(item) = items.last_mut() {
                    item.lines.push(text.to_string());
                }
                true
            }
            _ => false,
        }
    }

    fn open(&mut self, class: LineClass<'_>) {
        match class {
            LineClass::Blank => {}
            LineClass::Fence(open) => {
                self.leaf = LeafState::Fence {
                    kind: open.kind,
                    info: open.info,
                    lines: vec![],
                };
            }
            LineClass::Heading { level, text } => {
                self.out.push(Block::heading(level, parse_inline(text)));
            }
            LineClass::Rule => self.out.push(Block::HorizontalRule),
            LineClass::Quote(text) => {
                let text = text.trim();
                let paragraphs = if text.is_empty() {
                    vec![vec![]]
                } else {
                    vec![vec![text.to_string()]]
                };
                self.leaf = LeafState::Quote { paragraphs };
            }
            LineClass::Item { marker, text } => {
                self.leaf = LeafState::List {
                    marker,
                    items: vec![open_item(text)],
                };
            }
            LineClass::Text(text) => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![text.to_string()],
                };
            }
        }
    }

    fn flush(&mut self) {
        let block = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph { lines } => Block::Paragraph(join_lines(&lines)),
            LeafState::Fence { info, lines, .. } => Block::CodeBlock {
                info,
                text: lines.join("\n"),
            },
            LeafState::Quote { paragraphs } => {
                let children: Vec<Block> = paragraphs
                    .iter()
                    .filter(|p| !p.is_empty())
                    .map(|p| Block::Paragraph(join_lines(p)))
                    .collect();
                // Bare `>` lines quote nothing.
                if children.is_empty() {
                    return;
                }
                Block::Blockquote(children)
            }
            LeafState::List { marker, items } => {
                let items = items.into_iter().map(close_item).collect();
                match marker {
                    ListMarker::Bullet(_) => Block::unordered(items),
                    ListMarker::Ordered(start) => Block::ordered(start, items),
                }
            }
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn open_item(text: &str) -> OpenItem {
    let (task, text) = match TaskMarker::split(text) {
        Some((checked, rest)) => (Some(checked), rest),
        None => (None, text),
    };
    OpenItem {
        task,
        lines: vec![text.trim().to_string()],
    }
}

fn close_item(item: OpenItem) -> ListItem {
    let content = join_lines(&item.lines);
    match item.task {
        Some(checked) => ListItem::Task { checked, content },
        None => ListItem::Plain(content),
    }
}

/// Inline-parses each line and joins them with line breaks.
fn join_lines(lines: &[String]) -> Vec<Inline> {
    let mut out = vec![];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(Inline::LineBreak);
        }
        out.extend(parse_inline(line));
    }
    out
}
