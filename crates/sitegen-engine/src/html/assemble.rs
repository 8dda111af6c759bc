use crate::error::Result;
use crate::parsing::{
    blocks::{Block, BlockContent, BlockKind, kinds::Heading},
    inline::parse_inline,
    parse_document,
};

use super::{
    convert::text_node_to_html_node,
    node::{HtmlNode, LeafNode, ParentNode},
};

/// Root element wrapping every block of a document.
pub const ROOT_TAG: &str = "div";

/// Converts a whole document into a tree rooted at a `<div>`.
///
/// # Errors
/// Any inline parse error from any block aborts the document. A document
/// with no blocks fails with [`EmptyContainer`](crate::MarkdownError::EmptyContainer)
/// for the root.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let children = parse_document(markdown)
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("assembled {} blocks", children.len());
    Ok(ParentNode::new(ROOT_TAG, children)?.into())
}

/// Converts one classified block into its subtree.
pub fn block_to_html_node(block: &Block) -> Result<HtmlNode> {
    let tag = block_tag(block.kind);
    let node = match block.content() {
        BlockContent::Inline(text) => ParentNode::new(tag, inline_children(&text)?)?,
        BlockContent::Items(items) => {
            let items = items
                .into_iter()
                .map(|item| -> Result<HtmlNode> {
                    Ok(ParentNode::new("li", inline_children(item)?)?.into())
                })
                .collect::<Result<Vec<_>>>()?;
            ParentNode::new(tag, items)?
        }
        BlockContent::Raw(code) => {
            let code = ParentNode::new("code", vec![LeafNode::raw(code).into()])?;
            ParentNode::new(tag, vec![code.into()])?
        }
    };
    Ok(node.into())
}

fn block_tag(kind: BlockKind) -> String {
    match kind {
        BlockKind::Paragraph => "p".to_string(),
        BlockKind::Heading { level } => Heading::tag(level),
        BlockKind::Code => "pre".to_string(),
        BlockKind::Quote => "blockquote".to_string(),
        BlockKind::UnorderedList => "ul".to_string(),
        BlockKind::OrderedList => "ol".to_string(),
    }
}

/// Inline-parses `text` into leaves. Text with no inline content at all
/// (`- ` or `****`) yields a single empty leaf so the container is not empty.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    let leaves: Vec<HtmlNode> = parse_inline(text)?
        .into_iter()
        .map(|node| text_node_to_html_node(node).into())
        .collect();
    if leaves.is_empty() {
        return Ok(vec![LeafNode::raw("").into()]);
    }
    Ok(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Construct, MarkdownError};
    use pretty_assertions::assert_eq;

    fn render(md: &str) -> String {
        markdown_to_html_node(md).unwrap().to_html()
    }

    #[test]
    fn heading() {
        assert_eq!(render("# Hello"), "<div><h1>Hello</h1></div>");
    }

    #[test]
    fn all_heading_levels() {
        assert_eq!(
            render("## Two\n\n###### Six"),
            "<div><h2>Two</h2><h6>Six</h6></div>"
        );
    }

    #[test]
    fn paragraph_with_emphasis() {
        assert_eq!(
            render("This is **bold** and _italic_ text."),
            "<div><p>This is <b>bold</b> and <i>italic</i> text.</p></div>"
        );
    }

    #[test]
    fn code_block_is_not_inline_parsed() {
        assert_eq!(
            render("```\nprint(1) **not bold**\n```"),
            "<div><pre><code>print(1) **not bold**</code></pre></div>"
        );
    }

    #[test]
    fn empty_code_block_keeps_empty_leaf() {
        assert_eq!(render("```\n```"), "<div><pre><code></code></pre></div>");
    }

    #[test]
    fn quote() {
        assert_eq!(
            render("> to be\n> or not _to be_"),
            "<div><blockquote>to be or not <i>to be</i></blockquote></div>"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            render("- one\n- **two**"),
            "<div><ul><li>one</li><li><b>two</b></li></ul></div>"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            render("1. one\n2. [two](/2)"),
            r#"<div><ol><li>one</li><li><a href="/2">two</a></li></ol></div>"#
        );
    }

    #[test]
    fn empty_list_item_renders_empty_li() {
        assert_eq!(
            render("- a\n- \n- b"),
            "<div><ul><li>a</li><li></li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn non_sequential_ordered_list_is_paragraph() {
        assert_eq!(render("1. a\n3. b"), "<div><p>1. a 3. b</p></div>");
    }

    #[test]
    fn blocks_keep_document_order() {
        assert_eq!(
            render("# T\n\npara\n\n- x"),
            "<div><h1>T</h1><p>para</p><ul><li>x</li></ul></div>"
        );
    }

    #[test]
    fn broken_link_fails_whole_document() {
        let err = markdown_to_html_node("# Fine\n\nSee [broken link").unwrap_err();
        assert!(matches!(
            err,
            MarkdownError::UnterminatedConstruct {
                construct: Construct::Link,
                offset: 4,
                ..
            }
        ));
    }

    #[test]
    fn empty_document_is_empty_container() {
        assert_eq!(
            markdown_to_html_node("\n\n").unwrap_err(),
            MarkdownError::EmptyContainer {
                tag: ROOT_TAG.to_string()
            }
        );
    }

    #[test]
    fn block_to_html_node_single_block() {
        let block = Block {
            raw_text: "### Small".to_string(),
            kind: BlockKind::Heading { level: 3 },
        };
        assert_eq!(block_to_html_node(&block).unwrap().to_html(), "<h3>Small</h3>");
    }
}
