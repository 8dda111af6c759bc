use std::fs;
use std::path::{Path, PathBuf};

use super::SiteError;

/// Scan for markdown files under `content_root`, sorted by path.
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, SiteError> {
    if !content_root.is_dir() {
        return Err(SiteError::InvalidContentDir(content_root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Write content to a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
