//! Markdown to HTML rendering for the sitegen static site generator.
//!
//! The pipeline is pure: [`markdown_to_html`] takes document text and returns
//! an HTML fragment, with no I/O and no shared state. The [`site`] module adds
//! the file-system layer that turns a content directory into pages.

pub mod error;
pub mod html;
pub mod parsing;
pub mod site;
pub mod title;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{Construct, MarkdownError, Result};
pub use html::{
    HtmlNode, LeafNode, ParentNode, Props, block_to_html_node, markdown_to_html_node,
    text_node_to_html_node,
};
pub use parsing::{
    blocks::{Block, BlockKind},
    inline::{TextNode, parse_inline},
    parse_document,
};
pub use site::SiteError;
pub use title::{extract_title, extract_title_from_tree};

/// Renders a Markdown document to an HTML fragment wrapped in a `<div>`.
///
/// # Errors
/// See [`MarkdownError`]; the first malformed construct aborts rendering.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(markdown_to_html_node(markdown)?.to_html())
}
