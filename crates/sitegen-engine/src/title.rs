use crate::error::{MarkdownError, Result};
use crate::html::{HtmlNode, block_to_html_node};
use crate::parsing::{blocks::BlockKind, parse_document};

/// Returns the text of the document's first `#` heading.
///
/// Only that heading is inline parsed, so malformed syntax elsewhere in the
/// document does not prevent extracting a title. Inline markup is dropped:
/// `# Hello **world**` gives `Hello world`.
pub fn extract_title(markdown: &str) -> Result<String> {
    let heading = parse_document(markdown)
        .into_iter()
        .find(|b| b.kind == BlockKind::Heading { level: 1 })
        .ok_or(MarkdownError::MissingHeading)?;
    Ok(block_to_html_node(&heading)?.text_content().trim().to_string())
}

/// Returns the text of the first `<h1>` directly under the root of `tree`.
pub fn extract_title_from_tree(tree: &HtmlNode) -> Result<String> {
    let HtmlNode::Parent(root) = tree else {
        return Err(MarkdownError::MissingHeading);
    };
    root.children()
        .iter()
        .find(|child| child.tag() == Some("h1"))
        .map(|h1| h1.text_content().trim().to_string())
        .ok_or(MarkdownError::MissingHeading)
}
