pub mod blocks;
pub mod inline;

use blocks::{Block, MarkdownBlockClassifier, split_blocks};

/// Splits and classifies a document into blocks, in document order.
pub fn parse_document(markdown: &str) -> Vec<Block> {
    let classifier = MarkdownBlockClassifier;

    split_blocks(markdown)
        .into_iter()
        .map(|raw_text| {
            let kind = classifier.classify(&raw_text);
            log::debug!("classified block as {kind:?}: {:?}", preview(&raw_text, 40));
            Block { raw_text, kind }
        })
        .collect()
}

/// Truncates text to at most `max` chars with "..." suffix, for log output.
fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
