/// Which fence characters opened a code block; only the same kind closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Returns the fence kind if `line` is a fence line (an info string such
    /// as ```` ```rust ```` is allowed after the opener).
    pub fn kind(line: &str) -> Option<FenceKind> {
        let t = line.trim_start();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    pub fn closes(open: FenceKind, line: &str) -> bool {
        Self::kind(line) == Some(open)
    }

    /// Returns the lines between the opening and closing fence if `lines`
    /// forms a complete fenced block.
    pub fn body<'a, 'b>(lines: &'b [&'a str]) -> Option<&'b [&'a str]> {
        let (first, rest) = lines.split_first()?;
        let (last, body) = rest.split_last()?;
        let open = Self::kind(first)?;
        Self::closes(open, last).then_some(body)
    }
}
