use super::kinds::{CodeFence, FenceKind};

/// Splits a document into trimmed, non-empty blocks separated by blank lines.
///
/// A block that opens with a code fence runs until its closing fence, so blank
/// lines inside fenced code do not split it. Whitespace-only lines count as
/// blank.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut fence: Option<FenceKind> = None;

    for line in markdown.lines() {
        match fence {
            Some(open) => {
                current.push(line);
                if CodeFence::closes(open, line) {
                    fence = None;
                }
            }
            None if line.trim().is_empty() => flush(&mut blocks, &mut current),
            None => {
                if current.is_empty() {
                    fence = CodeFence::kind(line);
                }
                current.push(line);
            }
        }
    }

    // EOF flush
    flush(&mut blocks, &mut current);
    blocks
}

fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    let joined = current.join("\n");
    current.clear();
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
}
