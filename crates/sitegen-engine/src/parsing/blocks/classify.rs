use super::{
    kinds::{BlockQuote, CodeFence, Heading, ListMarker},
    types::BlockKind,
};

/// Classifies whole blocks produced by [`split_blocks`](super::split_blocks).
///
/// Kinds are tried in a fixed order: heading, code, quote, unordered list,
/// ordered list; anything else is a paragraph.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        let lines: Vec<&str> = block.lines().collect();
        let Some(first) = lines.first() else {
            return BlockKind::Paragraph;
        };

        if let Some((level, _)) = Heading::parse(first) {
            return BlockKind::Heading { level };
        }
        if CodeFence::body(&lines).is_some() {
            return BlockKind::Code;
        }
        if lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .all(|l| BlockQuote::strip_prefix(l).is_some())
        {
            return BlockKind::Quote;
        }
        if lines.iter().all(|l| ListMarker::strip_bullet(l).is_some()) {
            return BlockKind::UnorderedList;
        }
        if lines
            .iter()
            .enumerate()
            .all(|(i, l)| ListMarker::strip_ordinal(l, i + 1).is_some())
        {
            return BlockKind::OrderedList;
        }
        BlockKind::Paragraph
    }
}
