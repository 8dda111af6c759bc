//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = "`" `` - raw zone, its interior is never rescanned
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "_"`
//! - **`LinkSyntax`**: `[text](url)` and the `!` image prefix
//! - **`Delimiter`**: the paired delimiters in match precedence order
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `[` or `**`.

pub mod code_span;
pub mod delimiter;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use delimiter::Delimiter;
pub use emphasis::Emphasis;
pub use link::LinkSyntax;
