/// A byte cursor for inline parsing with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position in
/// the source line (via `base` offset). Delimiters are ASCII, so every stop
/// the parser makes on a delimiter is also a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Base offset added to local indices for absolute positions.
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

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Local index of the next occurrence of `pat` at or after local index `from`.
    pub fn find_from(&self, from: usize, pat: &[u8]) -> Option<usize> {
        let hay = self.s.as_bytes().get(from..)?;
        if pat.is_empty() || hay.len() < pat.len() {
            return None;
        }
        hay.windows(pat.len())
            .position(|w| w == pat)
            .map(|off| from + off)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Moves to local index `i`.
    pub fn seek(&mut self, i: usize) {
        self.i = i;
    }
}
