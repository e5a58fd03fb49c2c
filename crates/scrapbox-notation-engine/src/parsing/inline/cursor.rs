/// A cursor for inline tokenizing with position tracking.
///
/// Operates over a string slice while tracking the line-relative byte
/// position (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being tokenized.
    pub s: &'a str,
    /// Offset of `s` within its line (added to local index for positions).
    pub base: usize,
    /// Current local index into `s`. Always on a char boundary.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Advances by `n` bytes, returning the consumed slice.
    ///
    /// The caller must land on a char boundary; regex match lengths do.
    pub fn bump_n(&mut self, n: usize) -> &'a str {
        let end = (self.i + n).min(self.s.len());
        let taken = self.s.get(self.i..end).unwrap_or("");
        self.i = end;
        taken
    }
}
