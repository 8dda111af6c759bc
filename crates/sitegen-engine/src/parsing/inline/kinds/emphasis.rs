pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "_";
}
