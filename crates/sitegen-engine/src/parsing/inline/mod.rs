//! # Inline Parsing
//!
//! Cursor-based inline parsing in two passes.
//!
//! ## Architecture
//!
//! 1. **Links and images**: an explicit state machine walks the text once,
//!    cutting out `[text](url)` and `![alt](url)` and leaving plain runs between
//!    them.
//! 2. **Emphasis and code**: every plain run from pass 1 is scanned for
//!    `**`, `` ` `` and `_` pairs. Link text, alt text and URLs are never
//!    rescanned, so `[my_page](a_b.html)` needs no escaping.
//!
//! ## Modules
//!
//! - **`types`**: `TextNode` enum (Plain, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with lookback
//! - **`parser`**: `parse_inline()` main entry point and the two passes
//!
//! ## Failure
//!
//! Malformed input is never turned into literal text: an unclosed link or an
//! unmatched delimiter is an error for the whole line.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, split_delimiters, split_links};
pub use types::TextNode;
