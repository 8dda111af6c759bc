use std::iter;

use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, Paragraph};

/// The kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Default when no other kind matches.
    Paragraph,
    /// `#` through `######`.
    Heading { level: u8 },
    /// A fenced code block. A raw zone: no inline parsing inside.
    Code,
    /// Every non-blank line starts with `>`.
    Quote,
    /// Every line starts with a bullet.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in order.
    OrderedList,
}

/// A classified block of the document, produced transiently while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block text with surrounding whitespace trimmed.
    pub raw_text: String,
    pub kind: BlockKind,
}

/// The text a block contributes once its syntax markers are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent<'a> {
    /// One logical line, ready for inline parsing.
    Inline(String),
    /// One logical line per list item.
    Items(Vec<&'a str>),
    /// Verbatim text that must not be inline parsed.
    Raw(String),
}

impl Block {
    /// Strips the markers belonging to this block's kind.
    pub fn content(&self) -> BlockContent<'_> {
        let mut lines = self.raw_text.lines();
        match self.kind {
            BlockKind::Paragraph => BlockContent::Inline(Paragraph::join_lines(lines)),
            BlockKind::Heading { .. } => {
                let first = lines.next().and_then(Heading::parse).map_or("", |(_, t)| t);
                BlockContent::Inline(Paragraph::join_lines(iter::once(first).chain(lines)))
            }
            BlockKind::Code => {
                let all: Vec<&str> = lines.collect();
                BlockContent::Raw(CodeFence::body(&all).unwrap_or_default().join("\n"))
            }
            BlockKind::Quote => BlockContent::Inline(Paragraph::join_lines(
                lines.filter_map(BlockQuote::strip_prefix),
            )),
            BlockKind::UnorderedList => BlockContent::Items(
                lines
                    .filter_map(ListMarker::strip_bullet)
                    .map(str::trim)
                    .collect(),
            ),
            BlockKind::OrderedList => BlockContent::Items(
                lines
                    .enumerate()
                    .filter_map(|(i, l)| ListMarker::strip_ordinal(l, i + 1))
                    .map(str::trim)
                    .collect(),
            ),
        }
    }
}
