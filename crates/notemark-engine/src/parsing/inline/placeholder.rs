use std::sync::OnceLock;

use regex::Regex;

use crate::models::Inline;

/// Frozen inline spans for one render pass.
///
/// A resolved span (code, link, strong, ...) is swapped out of the working
/// string for an integer-indexed token built from private-use characters.
/// Later passes cannot see inside the token, so they never re-process a
/// span that is already resolved. Tokens never outlive the render call
/// that created them.
#[derive(Debug, Default)]
pub struct Placeholders {
    frozen: Vec<Option<Inline>>,
}

impl Placeholders {
    pub const OPEN: char = '\u{E000}';
    pub const CLOSE: char = '\u{E001}';

    fn token_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\x{E000}(\d+)\x{E001}").expect("Invalid placeholder regex")
        })
    }

    /// True when `s` already contains placeholder characters, in which case
    /// it cannot be rendered with placeholders safely.
    pub fn collides(s: &str) -> bool {
        s.contains([Self::OPEN, Self::CLOSE])
    }

    /// Stores `node` and returns the token standing in for it.
    pub fn freeze(&mut self, node: Inline) -> String {
        let index = self.frozen.len();
        self.frozen.push(Some(node));
        format!("{}{index}{}", Self::OPEN, Self::CLOSE)
    }

    /// Restores every token in `s`, in index order of appearance, turning
    /// the surrounding text into [`Inline::Text`] nodes.
    pub fn thaw(&mut self, s: &str) -> Vec<Inline> {
        let mut out = vec![];
        let mut last = 0;
        for caps in Self::token_regex().captures_iter(s) {
            let Some(token) = caps.get(0) else { continue };
            let restored = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| self.frozen.get_mut(i))
                .and_then(Option::take);
            let Some(node) = restored else { continue };

            if token.start() > last {
                out.push(Inline::Text(s[last..token.start()].to_string()));
            }
            out.push(node);
            last = token.end();
        }
        if last < s.len() {
            out.push(Inline::Text(s[last..].to_string()));
        }
        out
    }
}
