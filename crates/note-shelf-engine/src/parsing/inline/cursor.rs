/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position in
/// the preprocessed text (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Offset of `s` in the preprocessed text.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks at the byte before the current position, `None` at the start.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|p| self.s.as_bytes().get(p).copied())
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|r| r.starts_with(pat))
    }

    /// Local index of the next occurrence of `pat` at or after local index `from`.
    ///
    /// Searches bytes, so `from` need not fall on a char boundary.
    pub fn find_from(&self, from: usize, pat: &[u8]) -> Option<usize> {
        if pat.is_empty() {
            return None;
        }
        self.s
            .as_bytes()
            .get(from..)?
            .windows(pat.len())
            .position(|w| w == pat)
            .map(|off| from + off)
    }

    /// Local index of the next `b` at or after local index `from`.
    pub fn find_byte_from(&self, from: usize, b: u8) -> Option<usize> {
        self.s
            .as_bytes()
            .get(from..)?
            .iter()
            .position(|&c| c == b)
            .map(|off| from + off)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to local index `i`.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i;
    }
}
