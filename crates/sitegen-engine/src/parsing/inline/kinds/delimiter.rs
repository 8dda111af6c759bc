use super::{CodeSpan, Emphasis};
use crate::parsing::inline::types::TextNode;

/// A paired delimiter recognised by the emphasis/code pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Code,
    Italic,
}

impl Delimiter {
    /// Match precedence: `**` must be tried before any single-byte marker.
    pub const ALL: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Code, Delimiter::Italic];

    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => Emphasis::BOLD,
            Delimiter::Code => CodeSpan::TICK,
            Delimiter::Italic => Emphasis::ITALIC,
        }
    }

    /// Wraps the text found between a pair of these delimiters.
    pub fn wrap(self, text: String) -> TextNode {
        match self {
            Delimiter::Bold => TextNode::Bold(text),
            Delimiter::Code => TextNode::Code(text),
            Delimiter::Italic => TextNode::Italic(text),
        }
    }
}
