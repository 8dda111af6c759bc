use crate::error::{Construct, MarkdownError, Result};

use super::{
    cursor::Cursor,
    kinds::{Delimiter, LinkSyntax},
    types::TextNode,
};

/// Parses one logical line of inline content into [`TextNode`]s.
///
/// Links and images are cut out first; the plain runs left between them are
/// then split on emphasis and code delimiters.
///
/// # Errors
/// - [`MarkdownError::UnterminatedConstruct`] for a `[` or `![` that is not
///   closed by `](...)`
/// - [`MarkdownError::UnmatchedDelimiter`] for `**`, `_` or `` ` `` without
///   a closing partner
pub fn parse_inline(s: &str) -> Result<Vec<TextNode>> {
    let mut out = Vec::new();
    for node in split_links(s)? {
        match node {
            TextNode::Plain(text) => out.extend(split_delimiters(&text)?),
            styled => out.push(styled),
        }
    }
    Ok(out)
}

/// Where the link scanner is. `InText` and `InUrl` are mutually exclusive by
/// construction; both remember where the construct opened for error reporting.
#[derive(Debug, Clone, Copy)]
enum LinkState {
    Plain,
    InText {
        construct: Construct,
        open: usize,
        text_start: usize,
    },
    InUrl {
        construct: Construct,
        open: usize,
        text_start: usize,
        text_end: usize,
        url_start: usize,
    },
}

/// Splits `s` into plain runs, links and images.
///
/// Link text, alt text and URLs are taken verbatim; only the returned
/// `Plain` nodes may still contain emphasis syntax.
pub fn split_links(s: &str) -> Result<Vec<TextNode>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut run_start = 0;
    let mut state = LinkState::Plain;

    while let Some(b) = cur.peek() {
        match state {
            LinkState::Plain if b == LinkSyntax::TEXT_OPEN => {
                let (construct, open) = if cur.prev() == Some(LinkSyntax::IMAGE_PREFIX) {
                    (Construct::Image, cur.i - 1)
                } else {
                    (Construct::Link, cur.i)
                };
                push_plain(&mut out, cur.slice(run_start, open));
                cur.bump(); // [
                state = LinkState::InText {
                    construct,
                    open,
                    text_start: cur.i,
                };
            }
            LinkState::InText {
                construct,
                open,
                text_start,
            } if b == LinkSyntax::TEXT_CLOSE => {
                let text_end = cur.i;
                cur.bump(); // ]
                if cur.peek() != Some(LinkSyntax::URL_OPEN) {
                    return Err(unterminated(construct, open, s));
                }
                cur.bump(); // (
                state = LinkState::InUrl {
                    construct,
                    open,
                    text_start,
                    text_end,
                    url_start: cur.i,
                };
            }
            LinkState::InUrl {
                construct,
                text_start,
                text_end,
                url_start,
                ..
            } if b == LinkSyntax::URL_CLOSE => {
                let text = cur.slice(text_start, text_end).to_string();
                let url = cur.slice(url_start, cur.i).to_string();
                out.push(match construct {
                    Construct::Link => TextNode::Link { text, url },
                    Construct::Image => TextNode::Image { alt: text, url },
                });
                cur.bump(); // )
                run_start = cur.i;
                state = LinkState::Plain;
            }
            _ => {
                cur.bump();
            }
        }
    }

    match state {
        LinkState::Plain => {
            push_plain(&mut out, cur.slice(run_start, s.len()));
            Ok(out)
        }
        LinkState::InText {
            construct, open, ..
        }
        | LinkState::InUrl {
            construct, open, ..
        } => Err(unterminated(construct, open, s)),
    }
}

/// Splits a plain run on paired emphasis/code delimiters.
///
/// Delimiters do not nest: the interior of a span is taken verbatim.
pub fn split_delimiters(s: &str) -> Result<Vec<TextNode>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut run_start = 0;

    while !cur.eof() {
        let Some(delim) = Delimiter::ALL
            .into_iter()
            .find(|d| cur.starts_with(d.marker().as_bytes()))
        else {
            cur.bump();
            continue;
        };

        let marker = delim.marker().as_bytes();
        let open = cur.i;
        push_plain(&mut out, cur.slice(run_start, open));
        cur.bump_n(marker.len());
        let inner_start = cur.i;

        if !cur.seek(marker) {
            return Err(MarkdownError::UnmatchedDelimiter {
                delimiter: delim.marker(),
                offset: open,
                text: s.to_string(),
            });
        }
        let inner = cur.slice(inner_start, cur.i);
        if !inner.is_empty() {
            out.push(delim.wrap(inner.to_string()));
        }
        cur.bump_n(marker.len());
        run_start = cur.i;
    }

    push_plain(&mut out, cur.slice(run_start, s.len()));
    Ok(out)
}

fn push_plain(out: &mut Vec<TextNode>, text: &str) {
    if !text.is_empty() {
        out.push(TextNode::Plain(text.to_string()));
    }
}

fn unterminated(construct: Construct, offset: usize, s: &str) -> MarkdownError {
    MarkdownError::UnterminatedConstruct {
        construct,
        offset,
        text: s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(s: &str) -> TextNode {
        TextNode::Plain(s.to_string())
    }

    fn link(text: &str, url: &str) -> TextNode {
        TextNode::Link {
            text: text.to_string(),
            url: url.to_string(),
        }
    }

    fn image(alt: &str, url: &str) -> TextNode {
        TextNode::Image {
            alt: alt.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world").unwrap(), vec![plain("hello world")]);
    }

    #[test]
    fn parse_empty_text() {
        assert!(parse_inline("").unwrap().is_empty());
    }

    #[test]
    fn bold_and_italic_keep_source_order() {
        let nodes = parse_inline("This is **bold** and _italic_ text.").unwrap();
        assert_eq!(
            nodes,
            vec![
                plain("This is "),
                TextNode::Bold("bold".to_string()),
                plain(" and "),
                TextNode::Italic("italic".to_string()),
                plain(" text."),
            ]
        );
    }

    #[test]
    fn link_then_image() {
        let nodes =
            parse_inline("Check out [my site](https://example.com) and ![logo](img.png)").unwrap();
        assert_eq!(
            nodes,
            vec![
                plain("Check out "),
                link("my site", "https://example.com"),
                plain(" and "),
                image("logo", "img.png"),
            ]
        );
    }

    #[test]
    fn adjacent_spans_emit_no_empty_plain() {
        let nodes = parse_inline("**a**`b`[c](d)![e](f)").unwrap();
        assert_eq!(
            nodes,
            vec![
                TextNode::Bold("a".to_string()),
                TextNode::Code("b".to_string()),
                link("c", "d"),
                image("e", "f"),
            ]
        );
    }

    #[test]
    fn image_prefix_is_not_left_in_plain_run() {
        let nodes = split_links("Wow![x](y.png)").unwrap();
        assert_eq!(nodes, vec![plain("Wow"), image("x", "y.png")]);
    }

    #[test]
    fn link_urls_are_not_scanned_for_emphasis() {
        let nodes = parse_inline("see [my_page](a_b.html)").unwrap();
        assert_eq!(nodes, vec![plain("see "), link("my_page", "a_b.html")]);
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        let nodes = parse_inline("`snake_case` and **x**").unwrap();
        assert_eq!(
            nodes,
            vec![
                TextNode::Code("snake_case".to_string()),
                plain(" and "),
                TextNode::Bold("x".to_string()),
            ]
        );
    }

    #[test]
    fn bold_interior_is_not_rescanned() {
        let nodes = parse_inline("**a _b_ c**").unwrap();
        assert_eq!(nodes, vec![TextNode::Bold("a _b_ c".to_string())]);
    }

    #[test]
    fn empty_spans_are_dropped() {
        assert!(parse_inline("****").unwrap().is_empty());
    }

    #[test]
    fn multibyte_text_around_delimiters() {
        let nodes = parse_inline("café **crème** brûlée").unwrap();
        assert_eq!(
            nodes,
            vec![
                plain("café "),
                TextNode::Bold("crème".to_string()),
                plain(" brûlée"),
            ]
        );
    }

    #[rstest]
    #[case("See [broken link", Construct::Link, 4)]
    #[case("See [text](url", Construct::Link, 4)]
    #[case("![alt", Construct::Image, 0)]
    #[case("x ![alt](img.png", Construct::Image, 2)]
    #[case("[text] no url", Construct::Link, 0)]
    fn unterminated_links_fail(
        #[case] input: &str,
        #[case] construct: Construct,
        #[case] offset: usize,
    ) {
        let err = parse_inline(input).unwrap_err();
        assert_eq!(
            err,
            MarkdownError::UnterminatedConstruct {
                construct,
                offset,
                text: input.to_string(),
            }
        );
    }

    #[rstest]
    #[case("a **b", "**", 2)]
    #[case("_open", "_", 0)]
    #[case("x `y", "`", 2)]
    fn unmatched_delimiters_fail(
        #[case] input: &str,
        #[case] delimiter: &str,
        #[case] offset: usize,
    ) {
        match parse_inline(input).unwrap_err() {
            MarkdownError::UnmatchedDelimiter {
                delimiter: d,
                offset: o,
                ..
            } => {
                assert_eq!(d, delimiter);
                assert_eq!(o, offset);
            }
            other => panic!("expected UnmatchedDelimiter, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_delimiter_offset_is_relative_to_plain_run() {
        let err = parse_inline("[a](b) then _oops").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::UnmatchedDelimiter {
                delimiter: "_",
                offset: 6,
                text: " then _oops".to_string(),
            }
        );
    }

    #[test]
    fn styled_spans_preserve_left_to_right_order() {
        let input = "1 **2** 3 _4_ 5 `6` 7 [8](u) 9 ![10](v) 11";
        let texts: Vec<String> = parse_inline(input)
            .unwrap()
            .iter()
            .map(|n| n.text().trim().to_string())
            .collect();
        let expected: Vec<String> = (1..=11).map(|n| n.to_string()).collect();
        assert_eq!(texts, expected);
    }
}
