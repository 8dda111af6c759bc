/// ATX heading syntax: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// Returns `None` for anything that is not 1-6 markers followed by a space,
    /// so `####### x` and `#tag` are not headings.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let markers = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if markers == 0 || markers > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        let level = u8::try_from(markers).ok()?;
        line[markers..].strip_prefix(' ').map(|text| (level, text))
    }

    /// The element name for a heading level, `h1` through `h6`.
    pub fn tag(level: u8) -> String {
        format!("h{level}")
    }
}
