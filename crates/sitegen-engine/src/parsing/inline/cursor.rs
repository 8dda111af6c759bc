/// A cursor for byte-by-byte inline scanning.
///
/// All inline delimiters are ASCII, so any index the cursor stops at because
/// of a delimiter is also a char boundary and safe to slice at.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte immediately before the current position.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.s.as_bytes().get(j).copied())
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until the remaining input starts with `pat` or input ends.
    ///
    /// Returns true if `pat` was found.
    pub fn seek(&mut self, pat: &[u8]) -> bool {
        while !self.eof() {
            if self.starts_with(pat) {
                return true;
            }
            self.bump();
        }
        false
    }

    /// Slices the underlying string between two cursor positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.i, 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.i, 1);
    }

    #[test]
    fn prev_at_start_is_none() {
        let mut cur = Cursor::new("![alt]");
        assert_eq!(cur.prev(), None);
        cur.bump();
        assert_eq!(cur.prev(), Some(b'!'));
        assert_eq!(cur.peek(), Some(b'['));
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**");
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"__"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.prev(), None);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.starts_with(b"abcdef"));

        cur.bump();
        assert!(!cur.starts_with(b"bc"));
        assert!(cur.starts_with(b"b"));
    }

    #[test]
    fn starts_with_past_end_is_false() {
        // bump_n does not bounds check; starts_with must not panic afterwards
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"h"));
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn seek_stops_at_pattern() {
        let mut cur = Cursor::new("abc**def");
        assert!(cur.seek(b"**"));
        assert_eq!(cur.i, 3);
        assert_eq!(cur.slice(0, cur.i), "abc");
    }

    #[test]
    fn seek_runs_to_end_when_missing() {
        let mut cur = Cursor::new("abc");
        assert!(!cur.seek(b"_"));
        assert!(cur.eof());
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn slice_multibyte_between_ascii_delimiters() {
        let mut cur = Cursor::new("é_ü_");
        assert!(cur.seek(b"_"));
        let first = cur.i;
        cur.bump();
        assert!(cur.seek(b"_"));
        assert_eq!(cur.slice(first + 1, cur.i), "ü");
    }
}
