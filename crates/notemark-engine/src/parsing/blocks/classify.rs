use super::kinds::{
    AtxHeading, BlockQuote, CodeFence, FenceOpen, ListMarker, Paragraph, ThematicBreak,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Lines inside a fenced code
/// block are never classified; the builder consumes them raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// Opening (or closing) code fence.
    Fence(FenceOpen),
    /// ATX heading with its clamped level and text.
    Heading { level: usize, text: &'a str },
    /// Horizontal rule.
    Rule,
    /// Quoted line, prefix stripped.
    Quote(&'a str),
    /// List item with its marker and item text.
    Item { marker: ListMarker, text: &'a str },
    /// Anything else: paragraph or continuation text.
    Text(&'a str),
}

impl LineClass<'_> {
    /// True for lines that open a new block (and so end a paragraph or a
    /// list item's continuation).
    pub fn starts_block(&self) -> bool {
        !matches!(self, LineClass::Blank | LineClass::Text(_))
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line. First match wins, in this order: blank, fence,
    /// heading, rule, quote, list item, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some(open) = CodeFence::open(line) {
            return LineClass::Fence(open);
        }
        if let Some((level, text)) = AtxHeading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if ThematicBreak::matches(line) {
            return LineClass::Rule;
        }
        if let Some(text) = BlockQuote::strip_prefix(line) {
            return LineClass::Quote(text);
        }
        if let Some((marker, text)) = ListMarker::parse(line) {
            return LineClass::Item { marker, text };
        }
        LineClass::Text(Paragraph::line(line))
    }
}
