//! # Block Parsing
//!
//! Two-phase block parsing over the whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut into blocks at blank lines.
//!    Fenced code is a raw zone, so blank lines inside a fence do not split.
//!
//! 2. **Classification** (`classify`): each block is assigned a `BlockKind`
//!    from its lines. Only single-level quotes and lists are recognised.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`, `BlockContent`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, ListMarker, Paragraph)
//! - **`split`**: `split_blocks` blank-line segmentation
//! - **`classify`**: `MarkdownBlockClassifier` produces a `BlockKind` per block

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::MarkdownBlockClassifier;
pub use split::split_blocks;
pub use types::{Block, BlockContent, BlockKind};
