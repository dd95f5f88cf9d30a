/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no
/// other block opener matches. Their lines are trimmed and joined with
/// line breaks; inline parsing is applied to each line.
pub struct Paragraph;

impl Paragraph {
    pub fn line(line: &str) -> &str {
        line.trim()
    }
}
