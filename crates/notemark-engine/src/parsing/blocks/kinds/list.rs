use crate::parsing::cursor::Cursor;

/// A list item marker: `-`/`*`/`+` or `N.`/`N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet(char),
    Ordered(u64),
}

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DELIMS: [u8; 2] = [b'.', b')'];
    /// Longest run of digits accepted as an ordered marker.
    pub const MAX_DIGITS: usize = 9;

    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Ordered(_))
    }

    /// Two markers belong to one list when they are of the same family
    /// (bullets with bullets, numbers with numbers).
    pub fn same_family(self, other: ListMarker) -> bool {
        self.is_ordered() == other.is_ordered()
    }

    /// Parses a list item line into its marker and item text.
    ///
    /// The marker must be followed by at least one space or tab.
    pub fn parse(line: &str) -> Option<(ListMarker, &str)> {
        let mut cur = Cursor::new(line);
        cur.eat_blanks();

        let marker = match cur.peek()? {
            b if Self::BULLETS.contains(&b) => {
                cur.bump();
                ListMarker::Bullet(b as char)
            }
            b if b.is_ascii_digit() => {
                let start = cur.i;
                let digits = cur.eat_while(|b| b.is_ascii_digit());
                if digits > Self::MAX_DIGITS {
                    return None;
                }
                let number = cur.since(start).parse().ok()?;
                if !Self::ORDERED_DELIMS.iter().any(|d| cur.eat(*d)) {
                    return None;
                }
                ListMarker::Ordered(number)
            }
            _ => return None,
        };

        if cur.eat_blanks() == 0 {
            return None;
        }
        Some((marker, cur.rest()))
    }
}

/// Task checkbox at the start of a list item's text.
pub struct TaskMarker;

impl TaskMarker {
    pub const UNCHECKED: &'static str = "[ ] ";
    pub const CHECKED: [&'static str; 2] = ["[x] ", "[X] "];

    /// Splits `[ ] `/`[x] `/`[X] ` off the item text, returning the checked
    /// state and the remaining text. `None` for plain items.
    pub fn split(text: &str) -> Option<(bool, &str)> {
        if let Some(rest) = text.strip_prefix(Self::UNCHECKED) {
            return Some((false, rest));
        }
        Self::CHECKED
            .iter()
            .find_map(|m| text.strip_prefix(m))
            .map(|rest| (true, rest))
    }
}
