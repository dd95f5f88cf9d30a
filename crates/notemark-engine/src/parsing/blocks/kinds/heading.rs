use crate::models::MAX_HEADING_LEVEL;
use crate::parsing::cursor::Cursor;

/// ATX heading: `#`×N, whitespace, text, optional closing `#` run.
pub struct AtxHeading;

impl AtxHeading {
    pub const HASH: u8 = b'#';

    /// Returns the clamped level and the heading text.
    ///
    /// More than six `#` still make a heading, of level six.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let mut cur = Cursor::new(line.trim_start());
        let hashes = cur.eat_while(|b| b == Self::HASH);
        if hashes == 0 || cur.eat_blanks() == 0 {
            return None;
        }
        let level = hashes.min(MAX_HEADING_LEVEL as usize);
        Some((level, Self::strip_closing(cur.rest())))
    }

    /// Strips a trailing `#` run when it is separated from the text by
    /// whitespace (or is all there is).
    fn strip_closing(text: &str) -> &str {
        let text = text.trim_end();
        let without = text.trim_end_matches(Self::HASH as char);
        if without.len() == text.len() {
            return text;
        }
        if without.is_empty() || without.ends_with([' ', '\t']) {
            without.trim_end()
        } else {
            text
        }
    }
}
