//! # HTML Tree
//!
//! The typed node tree and its renderer, plus the passes that build it from
//! parsed Markdown.
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode` (Leaf / Parent), `Props`, rendering
//! - **`convert`**: `TextNode` to `LeafNode` mapping
//! - **`assemble`**: block to subtree, document to `<div>` root

pub mod assemble;
pub mod convert;
pub mod node;

pub use assemble::{block_to_html_node, markdown_to_html_node};
pub use convert::text_node_to_html_node;
pub use node::{HtmlNode, LeafNode, ParentNode, Props};
