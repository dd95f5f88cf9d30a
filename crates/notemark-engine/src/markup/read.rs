//! Reading stored markup back into the typed model.
//!
//! Stored notes may be real structured markup (written by
//! [`serialize`](super::serialize)), legacy editor output made only of
//! `div`/`p`/`br` wrappers, or plain text that merely contains angle
//! brackets. All three go through the same `html5ever` DOM; the element
//! census decides which of them we are looking at.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::models::{Block, Document, Inline, ListItem, tidy_inlines};

use super::serialize::TASK_ITEM_CLASS;

/// Wrapper elements that carry no structure of their own when they have no
/// attributes.
const PLAIN_WRAPPERS: &[&str] = &["div", "p", "br"];

/// Elements the parser inserts on its own around any fragment.
const IMPLIED: &[&str] = &["html", "head", "body"];

/// Elements that can run code or pull in outside content. Stored content
/// holding any of them is only ever shown as text.
const UNSAFE: &[&str] = &["script", "style", "iframe", "object", "embed"];

/// What the DOM of a piece of stored content contains.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    /// At least one element other than an attribute-less plain wrapper.
    pub structured: bool,
    /// At least one element that can run code or embed outside content
    /// (`script`, `style`, `iframe`, `object`, `embed`).
    pub foreign: bool,
}

impl Census {
    /// Content containing foreign elements is treated as literal text.
    pub fn is_literal_text(self) -> bool {
        self.foreign
    }

    pub fn is_substantive(self) -> bool {
        self.structured && !self.foreign
    }
}

fn parse(raw: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(raw)
}

/// Takes the element census of `raw`.
pub fn census(raw: &str) -> Census {
    let dom = parse(raw);
    let mut census = Census::default();
    walk_census(&dom.document, &mut census);
    census
}

fn walk_census(handle: &Handle, census: &mut Census) {
    if let NodeData::Element { name, attrs, .. } = &handle.data {
        let tag = name.local.as_ref();
        if UNSAFE.contains(&tag) {
            census.foreign = true;
        } else if PLAIN_WRAPPERS.contains(&tag) {
            if !attrs.borrow().is_empty() {
                census.structured = true;
            }
        } else if !IMPLIED.contains(&tag) {
            census.structured = true;
        }
    }
    for child in handle.children.borrow().iter() {
        walk_census(child, census);
    }
}

/// Extracts the plain text of stored content.
///
/// `div` and block elements start a new line, `p` is followed by a blank
/// line and `br` ends a line. Content holding foreign elements is returned
/// as-is (newline-normalized): it was never markup in the first place.
pub fn plain_text_of(raw: &str) -> String {
    let dom = parse(raw);
    let mut census = Census::default();
    walk_census(&dom.document, &mut census);
    if census.is_literal_text() {
        return normalize_newlines(raw);
    }

    let mut collector = TextCollector::default();
    if let Some(body) = find_element(&dom.document, "body") {
        collector.walk(&body);
    }
    collector.finish()
}

/// Converts `\r\n` and lone `\r` to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn find_element(handle: &Handle, wanted: &str) -> Option<Handle> {
    if tag_of(handle) == Some(wanted) {
        return Some(handle.clone());
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, wanted))
}

fn tag_of(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

fn attr(handle: &Handle, wanted: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == wanted)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    push_text_content(handle, &mut out);
    out
}

fn push_text_content(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { .. } if tag_of(handle) == Some("br") => out.push('\n'),
        _ => {
            for child in handle.children.borrow().iter() {
                push_text_content(child, out);
            }
        }
    }
}

#[derive(Default)]
struct TextCollector {
    lines: Vec<String>,
    current: String,
}

impl TextCollector {
    fn walk(&mut self, handle: &Handle) {
        match &handle.data {
            NodeData::Text { contents } => self.current.push_str(&contents.borrow()),
            NodeData::Element { .. } => match tag_of(handle).unwrap_or_default() {
                "br" => self.end_line(),
                "p" => {
                    self.break_block();
                    self.walk_children(handle);
                    self.blank_line();
                }
                "div" | "li" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "blockquote"
                | "pre" | "hr" | "ul" | "ol" => {
                    self.break_block();
                    self.walk_children(handle);
                    self.break_block();
                }
                _ => self.walk_children(handle),
            },
            _ => self.walk_children(handle),
        }
    }

    fn walk_children(&mut self, handle: &Handle) {
        for child in handle.children.borrow().iter() {
            self.walk(child);
        }
    }

    fn end_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    fn break_block(&mut self) {
        // Whitespace between block elements is layout, not a line.
        if self.current.trim().is_empty() {
            self.current.clear();
        } else {
            self.end_line();
        }
    }

    fn blank_line(&mut self) {
        self.break_block();
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn finish(mut self) -> String {
        self.break_block();
        self.lines.join("\n").trim_matches('\n').to_string()
    }
}

/// Reads structured markup into a [`Document`].
///
/// Recognised block elements map onto their [`Block`] variants; loose
/// inline content between blocks becomes paragraphs; unknown inline
/// wrappers are flattened to their children. Foreign elements contribute
/// their text only.
pub fn read_markup(raw: &str) -> Document {
    let dom = parse(raw);
    let Some(body) = find_element(&dom.document, "body") else {
        return Document::default();
    };
    Document::new(read_blocks(&body))
}

fn read_blocks(parent: &Handle) -> Vec<Block> {
    let mut blocks = vec![];
    let mut pending: Vec<Inline> = vec![];

    for child in parent.children.borrow().iter() {
        if let Some(read) = read_block(child) {
            flush_paragraph(&mut pending, &mut blocks);
            blocks.extend(read);
        } else {
            read_inline(child, &mut pending);
        }
    }
    flush_paragraph(&mut pending, &mut blocks);
    blocks
}

/// `None` when `handle` is inline content, otherwise the blocks it holds
/// (possibly none, for an empty wrapper).
fn read_block(handle: &Handle) -> Option<Vec<Block>> {
    let tag = tag_of(handle)?;
    let block = match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag[1..].parse::<usize>().unwrap_or(1);
            Some(Block::heading(level, read_inlines(handle)))
        }
        "p" => paragraph(read_inlines(handle)),
        // A wrapper around real blocks: lift them out.
        "div" if has_block_children(handle) => return Some(read_blocks(handle)),
        "div" => paragraph(read_inlines(handle)),
        "blockquote" => Some(Block::Blockquote(
            read_blocks(handle)
                .into_iter()
                .map(|b| match b {
                    Block::Paragraph(_) => b,
                    other => Block::Paragraph(other.to_inlines()),
                })
                .collect(),
        )),
        "ul" | "ol" => Some(read_list(handle, tag == "ol")),
        "pre" => Some(read_code_block(handle)),
        "hr" => Some(Block::HorizontalRule),
        _ => return None,
    };
    Some(block.into_iter().collect())
}

fn has_block_children(handle: &Handle) -> bool {
    handle.children.borrow().iter().any(|c| {
        matches!(
            tag_of(c),
            Some(
                "h1" | "h2"
                    | "h3"
                    | "h4"
                    | "h5"
                    | "h6"
                    | "p"
                    | "div"
                    | "blockquote"
                    | "ul"
                    | "ol"
                    | "pre"
                    | "hr"
            )
        )
    })
}

fn paragraph(inlines: Vec<Inline>) -> Option<Block> {
    let inlines = tidy_inlines(inlines);
    if inlines.is_empty() {
        None
    } else {
        Some(Block::Paragraph(inlines))
    }
}

fn flush_paragraph(pending: &mut Vec<Inline>, blocks: &mut Vec<Block>) {
    let inlines = std::mem::take(pending);
    let only_whitespace = inlines
        .iter()
        .all(|i| matches!(i, Inline::Text(t) if t.trim().is_empty()));
    if only_whitespace {
        return;
    }
    if let Some(p) = paragraph(inlines) {
        blocks.push(p);
    }
}

fn read_list(handle: &Handle, ordered: bool) -> Block {
    let items = handle
        .children
        .borrow()
        .iter()
        .filter(|c| tag_of(c) == Some("li"))
        .map(read_item)
        .collect();
    if ordered {
        let start = attr(handle, "start")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(1);
        Block::ordered(start, items)
    } else {
        Block::unordered(items)
    }
}

fn read_item(li: &Handle) -> ListItem {
    let checkbox = li.children.borrow().iter().find_map(|c| {
        let is_checkbox = tag_of(c) == Some("input")
            && attr(c, "type").is_some_and(|t| t.eq_ignore_ascii_case("checkbox"));
        is_checkbox.then(|| attr(c, "checked").is_some())
    });
    let is_task = checkbox.is_some()
        || attr(li, "class").is_some_and(|c| c.split_whitespace().any(|c| c == TASK_ITEM_CLASS));

    let mut content = read_inlines(li);
    if is_task && let Some(Inline::Text(first)) = content.first_mut() {
        // The separator written after the checkbox is not content.
        if let Some(stripped) = first.strip_prefix(' ') {
            *first = stripped.to_string();
        }
    }
    let content = tidy_inlines(content);

    if is_task {
        ListItem::Task {
            checked: checkbox.unwrap_or(false),
            content,
        }
    } else {
        ListItem::Plain(content)
    }
}

fn read_code_block(pre: &Handle) -> Block {
    let code = pre
        .children
        .borrow()
        .iter()
        .find(|c| tag_of(c) == Some("code"))
        .cloned();
    let info = code
        .as_ref()
        .and_then(|c| attr(c, "class"))
        .and_then(|class| {
            class
                .split_whitespace()
                .find_map(|c| c.strip_prefix("language-").map(str::to_string))
        });
    let text = match &code {
        Some(code) => text_content(code),
        None => text_content(pre),
    };
    Block::CodeBlock { info, text }
}

fn read_inlines(parent: &Handle) -> Vec<Inline> {
    let mut out = vec![];
    for child in parent.children.borrow().iter() {
        read_inline(child, &mut out);
    }
    tidy_inlines(out)
}

fn read_inline(handle: &Handle, out: &mut Vec<Inline>) {
    match &handle.data {
        NodeData::Text { contents } => out.push(Inline::Text(contents.borrow().to_string())),
        NodeData::Element { .. } => match tag_of(handle).unwrap_or_default() {
            "br" => out.push(Inline::LineBreak),
            "strong" | "b" => out.push(Inline::Strong(read_inlines(handle))),
            "em" | "i" => out.push(Inline::Emphasis(read_inlines(handle))),
            "s" | "del" | "strike" => out.push(Inline::Strikethrough(read_inlines(handle))),
            "code" => out.push(Inline::Code(text_content(handle))),
            "a" => match attr(handle, "href") {
                Some(url) => out.push(Inline::Link {
                    label: text_content(handle),
                    url,
                }),
                None => out.extend(read_inlines(handle)),
            },
            "input" => {}
            _ => out.extend(read_inlines(handle)),
        },
        _ => {}
    }
}
