/// Link and image syntax: `[text](url)` and `![alt](url)`.
pub struct LinkSyntax;

impl LinkSyntax {
    /// Opens the link text (or image alt text).
    pub const TEXT_OPEN: u8 = b'[';
    /// Closes the link text; must be followed directly by [`Self::URL_OPEN`].
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    /// Placed immediately before [`Self::TEXT_OPEN`], marks an image.
    pub const IMAGE_PREFIX: u8 = b'!';
}
