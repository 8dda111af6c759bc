/// A parsed inline node.
///
/// Every variant owns its display text; links and images also own their URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextNode {
    /// Plain text that isn't part of any special construct.
    Plain(String),
    /// `**bold**`
    Bold(String),
    /// `_italic_`
    Italic(String),
    /// A code span (backtick-delimited). Its content is taken verbatim.
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl TextNode {
    /// The display text: link text for links, alt text for images.
    pub fn text(&self) -> &str {
        match self {
            TextNode::Plain(t) | TextNode::Bold(t) | TextNode::Italic(t) | TextNode::Code(t) => t,
            TextNode::Link { text, .. } => text,
            TextNode::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TextNode::Link { url, .. } | TextNode::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}
