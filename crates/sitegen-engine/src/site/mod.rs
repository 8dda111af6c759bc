//! # Site Generation
//!
//! File-system glue around the rendering pipeline: copying static assets,
//! discovering Markdown pages and writing them through an HTML template.
//!
//! Nothing here parses Markdown itself; pages go through
//! [`markdown_to_html_node`](crate::markdown_to_html_node) and
//! [`extract_title_from_tree`](crate::extract_title_from_tree).

mod copy;
mod files;
mod pages;
mod template;

use std::path::PathBuf;

use crate::error::MarkdownError;

pub use copy::copy_directory;
pub use files::{scan_markdown_files, write_file};
pub use pages::{generate_page, generate_pages_recursive, render_page};
pub use template::Template;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(PathBuf),
    #[error("{path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error("Failed to render {path}: {source}")]
    Render {
        path: PathBuf,
        source: MarkdownError,
    },
}
