use std::fmt;

/// Inline constructs that open with a bracket and must be closed by `](...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Link,
    Image,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::Link => f.write_str("link"),
            Construct::Image => f.write_str("image"),
        }
    }
}

/// Errors raised while turning Markdown into an HTML tree.
///
/// Parsing never recovers: the first malformed construct aborts the block it
/// belongs to, and with it the whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("unterminated {construct} opened at byte {offset} in {text:?}")]
    UnterminatedConstruct {
        construct: Construct,
        /// Byte offset of the opening `[` (or the `!` of an image).
        offset: usize,
        text: String,
    },

    #[error("unmatched `{delimiter}` delimiter at byte {offset} in {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        /// Byte offset of the opening delimiter within the plain run.
        offset: usize,
        text: String,
    },

    #[error("no top-level heading found")]
    MissingHeading,

    #[error("<{tag}> must have at least one child")]
    EmptyContainer { tag: String },
}

pub type Result<T, E = MarkdownError> = std::result::Result<T, E>;
