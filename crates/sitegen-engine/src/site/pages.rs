use std::fs;
use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::error::MarkdownError;
use crate::html::markdown_to_html_node;
use crate::title::extract_title_from_tree;

use super::{SiteError, Template, scan_markdown_files, write_file};

/// Renders one Markdown document into a complete page.
pub fn render_page(
    markdown: &str,
    template: &Template,
    base_path: &str,
) -> Result<String, MarkdownError> {
    let root = markdown_to_html_node(markdown)?;
    let title = extract_title_from_tree(&root)?;
    Ok(template.fill(&title, &root.to_html(), base_path))
}

/// Renders the Markdown file at `from` through the template at
/// `template_path` and writes the page to `dest`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    let template = Template::load(template_path)?;
    generate_with_template(from, &template, template_path, dest, base_path)
}

/// Generates a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `dest_dir` with an `.html` extension.
///
/// Returns the written page paths in sorted source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let files = scan_markdown_files(content_dir)?;
    let template = Template::load(template_path)?;
    fs::create_dir_all(dest_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let dest = output_path(content_dir, &file, dest_dir)?;
        generate_with_template(&file, &template, template_path, &dest, base_path)?;
        written.push(dest);
    }
    log::info!("Generated {} pages into {}", written.len(), dest_dir.display());
    Ok(written)
}

fn generate_with_template(
    from: &Path,
    template: &Template,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    if !from.is_file() {
        return Err(SiteError::NotFound(from.to_path_buf()));
    }

    log::info!(
        "Generating page {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );
    let markdown = fs::read_to_string(from)?;
    let page = render_page(&markdown, template, base_path).map_err(|source| SiteError::Render {
        path: from.to_path_buf(),
        source,
    })?;
    write_file(dest, &page)
}

/// `content/blog/post.md` becomes `dest/blog/post.html`.
fn output_path(content_dir: &Path, file: &Path, dest_dir: &Path) -> Result<PathBuf, SiteError> {
    let outside = || SiteError::OutsideRoot {
        path: file.to_path_buf(),
        root: content_dir.to_path_buf(),
    };
    let relative = file.strip_prefix(content_dir).map_err(|_| outside())?;
    let relative = RelativePathBuf::from_path(relative).map_err(|_| outside())?;
    Ok(relative.with_extension("html").to_path(dest_dir))
}
