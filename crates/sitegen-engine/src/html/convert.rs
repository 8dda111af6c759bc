use crate::parsing::inline::TextNode;

use super::node::{LeafNode, Props};

/// Maps one inline node to the leaf element that renders it.
///
/// Total over [`TextNode`]: every variant has a leaf form.
pub fn text_node_to_html_node(node: TextNode) -> LeafNode {
    match node {
        TextNode::Plain(text) => LeafNode::raw(text),
        TextNode::Bold(text) => LeafNode::tagged("b", text),
        TextNode::Italic(text) => LeafNode::tagged("i", text),
        TextNode::Code(text) => LeafNode::tagged("code", text),
        TextNode::Link { text, url } => {
            LeafNode::tagged("a", text).with_props(Props::new().with("href", url))
        }
        TextNode::Image { alt, url } => {
            LeafNode::tagged("img", "").with_props(Props::new().with("src", url).with("alt", alt))
        }
    }
}

impl From<TextNode> for LeafNode {
    fn from(node: TextNode) -> Self {
        text_node_to_html_node(node)
    }
}
