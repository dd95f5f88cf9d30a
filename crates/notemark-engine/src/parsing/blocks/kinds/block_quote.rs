/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one blockquote prefix (and one following space) from a line.
    ///
    /// Only one level is stripped: quotes do not nest, so `> > x` yields
    /// the literal text `> x`. Returns `None` if the line is not quoted.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), Some("hello"));
    }

    #[test]
    fn strip_indented_quote() {
        assert_eq!(BlockQuote::strip_prefix("  > hello"), Some("hello"));
    }

    #[test]
    fn nested_quote_keeps_inner_marker() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), Some("> hello"));
    }

    #[test]
    fn bare_marker_is_empty_quote_line() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(""));
    }
}
