/// What an edit event did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Text was converted into structure.
    Promoted(Promotion),
    /// Plain insertion (or a plain line split).
    Inserted,
    /// Nothing changed.
    Ignored,
}

/// The structure a promotion created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    Strong,
    Strikethrough,
    Code,
    Emphasis,
    Heading(u8),
    Blockquote,
    ListItem { ordered: bool, task: bool },
    HorizontalRule,
    /// A fence line opened a code block.
    CodeBlock,
    /// A closing fence line ended the code block.
    CodeBlockClosed,
    /// A line break at the end of a list item opened the next item.
    ListContinued,
    /// A line break on an empty list item left the list.
    ListExited,
    /// A line break on an empty quote line left the quote.
    QuoteExited,
}
