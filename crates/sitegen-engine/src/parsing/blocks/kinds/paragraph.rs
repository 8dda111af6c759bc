/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// kind matches. Their lines are folded into one logical line for inline
/// parsing.
pub struct Paragraph;

impl Paragraph {
    /// Joins lines with a single space, dropping each line's surrounding
    /// whitespace and any lines left empty.
    pub fn join_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        lines
            .into_iter()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
