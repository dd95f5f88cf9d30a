/// A cursor for byte-by-byte scanning of a single line.
///
/// Block kinds use it to read their markers (`#` runs, list bullets,
/// ordered numbers) without slicing by hand. All markers are ASCII, so
/// every position the cursor stops at is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of line.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Consumes `b` if it is next.
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `pred` holds, returning how many were consumed.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.i;
        while self.peek().is_some_and(&pred) {
            self.i += 1;
        }
        self.i - start
    }

    /// Consumes spaces and tabs, returning how many were consumed.
    pub fn eat_blanks(&mut self) -> usize {
        self.eat_while(|b| b == b' ' || b == b'\t')
    }

    /// Text consumed so far starting at `from`.
    pub fn since(&self, from: usize) -> &'a str {
        &self.s[from..self.i]
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }
}
