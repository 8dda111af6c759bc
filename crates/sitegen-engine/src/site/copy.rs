use std::fs;
use std::path::Path;

use super::SiteError;

/// Replaces `destination` with a recursive copy of `origin`.
///
/// Any existing `destination` is removed first so stale files never survive
/// a rebuild. Returns the number of files copied.
pub fn copy_directory(origin: &Path, destination: &Path) -> Result<usize, SiteError> {
    if !origin.is_dir() {
        return Err(SiteError::NotFound(origin.to_path_buf()));
    }
    if destination.exists() {
        log::debug!("Removing {}", destination.display());
        fs::remove_dir_all(destination)?;
    }

    let copied = copy_recursive(origin, destination)?;
    log::info!(
        "Copied {copied} files from {} to {}",
        origin.display(),
        destination.display()
    );
    Ok(copied)
}

fn copy_recursive(from: &Path, to: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(to)?;

    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let path = entry.path();
        let target = to.join(entry.file_name());

        if path.is_dir() {
            copied += copy_recursive(&path, &target)?;
        } else {
            log::debug!("Copying {} to {}", path.display(), target.display());
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
