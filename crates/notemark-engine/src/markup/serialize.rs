use std::fmt::Write;

use crate::models::{Block, Document, Inline, ListItem};

use super::escape::{escape, escape_attr};

/// Class carried by `<li>` elements that hold a checkbox.
pub const TASK_ITEM_CLASS: &str = "task-item";

/// Serializes a document to compact markup (no whitespace between blocks).
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        write_block(&mut out, block);
    }
    out
}

/// Serializes a run of inline nodes.
pub fn serialize_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    write_inlines(&mut out, inlines);
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, content } => {
            let _ = write!(out, "<h{level}>");
            write_inlines(out, content);
            let _ = write!(out, "</h{level}>");
        }
        Block::Paragraph(content) => {
            out.push_str("<p>");
            write_inlines(out, content);
            out.push_str("</p>");
        }
        Block::Blockquote(children) => {
            out.push_str("<blockquote>");
            for child in children {
                write_block(out, child);
            }
            out.push_str("</blockquote>");
        }
        Block::List {
            ordered,
            start,
            items,
        } => {
            let tag = if *ordered { "ol" } else { "ul" };
            if *ordered && *start != 1 {
                let _ = write!(out, "<ol start=\"{start}\">");
            } else {
                let _ = write!(out, "<{tag}>");
            }
            for item in items {
                write_item(out, item);
            }
            let _ = write!(out, "</{tag}>");
        }
        Block::CodeBlock { info, text } => {
            match info {
                Some(lang) => {
                    let _ = write!(
                        out,
                        "<pre><code class=\"language-{}\">",
                        escape_attr(lang)
                    );
                }
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&escape(text));
            out.push_str("</code></pre>");
        }
        Block::HorizontalRule => out.push_str("<hr>"),
    }
}

fn write_item(out: &mut String, item: &ListItem) {
    match item {
        ListItem::Plain(content) => {
            out.push_str("<li>");
            write_inlines(out, content);
        }
        ListItem::Task { checked, content } => {
            let _ = write!(out, "<li class=\"{TASK_ITEM_CLASS}\">");
            if *checked {
                out.push_str("<input type=\"checkbox\" checked disabled>");
            } else {
                out.push_str("<input type=\"checkbox\" disabled>");
            }
            out.push(' ');
            write_inlines(out, content);
        }
    }
    out.push_str("</li>");
}

fn write_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(&escape(text)),
            Inline::Strong(children) => wrap(out, "strong", children),
            Inline::Emphasis(children) => wrap(out, "em", children),
            Inline::Strikethrough(children) => wrap(out, "s", children),
            Inline::Code(code) => {
                out.push_str("<code>");
                out.push_str(&escape(code));
                out.push_str("</code>");
            }
            Inline::Link { label, url } => {
                let _ = write!(
                    out,
                    "<a href=\"{}\">{}</a>",
                    escape_attr(url),
                    escape(label)
                );
            }
            Inline::LineBreak => out.push_str("<br>"),
        }
    }
}

fn wrap(out: &mut String, tag: &str, children: &[Inline]) {
    let _ = write!(out, "<{tag}>");
    write_inlines(out, children);
    let _ = write!(out, "</{tag}>");
}
