use crate::models::{Block, Document, Inline};

/// Wraps plain text into paragraphs without interpreting any markdown.
///
/// Runs of blank (or whitespace-only) lines separate paragraphs; each line
/// is trimmed and the lines of one paragraph are joined by line breaks.
pub fn wrap_paragraphs(text: &str) -> Document {
    let mut blocks = vec![];
    let mut lines: Vec<&str> = vec![];

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            push_paragraph(&mut lines, &mut blocks);
        } else {
            lines.push(line);
        }
    }
    push_paragraph(&mut lines, &mut blocks);
    Document::new(blocks)
}

fn push_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if lines.is_empty() {
        return;
    }
    let mut content = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.drain(..).enumerate() {
        if i > 0 {
            content.push(Inline::LineBreak);
        }
        content.push(Inline::text(line));
    }
    blocks.push(Block::Paragraph(content));
}
