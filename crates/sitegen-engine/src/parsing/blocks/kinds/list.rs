/// List item markers: `- item` (also `*` and `+`) and `1. item`.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDINAL_SUFFIX: &'static str = ". ";

    /// Strips a bullet and its following space.
    pub fn strip_bullet(line: &str) -> Option<&str> {
        let mut chars = line.chars();
        let bullet = chars.next()?;
        if !Self::BULLETS.contains(&bullet) {
            return None;
        }
        chars.as_str().strip_prefix(' ')
    }

    /// Strips `{expected}. ` from the start of a line.
    ///
    /// The number must be written exactly as `expected` (no leading zeros).
    pub fn strip_ordinal(line: &str, expected: usize) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || &line[..digits] != expected.to_string() {
            return None;
        }
        line[digits..].strip_prefix(Self::ORDINAL_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Some("item"))]
    #[case("* item", Some("item"))]
    #[case("+ item", Some("item"))]
    #[case("- ", Some(""))]
    #[case("-item", None)]
    #[case("**bold**", None)]
    #[case("1. item", None)]
    fn bullets(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(ListMarker::strip_bullet(line), expected);
    }

    #[rstest]
    #[case("1. first", 1, Some("first"))]
    #[case("12. twelfth", 12, Some("twelfth"))]
    #[case("3. b", 2, None)]
    #[case("01. a", 1, None)]
    #[case("1.a", 1, None)]
    #[case("- a", 1, None)]
    fn ordinals(#[case] line: &str, #[case] expected_n: usize, #[case] expected: Option<&str>) {
        assert_eq!(ListMarker::strip_ordinal(line, expected_n), expected);
    }
}
