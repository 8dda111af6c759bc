/// Blockquote block type with owned delimiter constant.
///
/// Only a single level of quoting is recognised; a second `>` stays in the
/// quoted text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote marker (and one following space) from a line.
    ///
    /// Leading whitespace before the marker is allowed. Returns `None` if
    /// the line is not quoted.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
