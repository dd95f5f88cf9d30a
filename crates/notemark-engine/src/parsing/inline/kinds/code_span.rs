use std::sync::OnceLock;

use regex::Regex;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": their contents are frozen before any other
/// inline pass runs, so nothing inside them is ever re-scanned.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// `` `...` `` on one line, shortest match first.
    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"`([^`\n]+?)`").expect("Invalid code span regex"))
    }
}
