//! Renaming a project directory in place.

use crate::error::{RenameError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Renames `dir` to `new_name` within its parent directory.
///
/// Returns the path of the renamed directory. In dry-run mode the checks run
/// but nothing is moved.
///
/// # Errors
///
/// Returns [`RenameError::DirectoryRename`] if `dir` is missing, has no
/// parent, the target already exists, or the underlying rename fails.
pub fn rename_directory(dir: &Path, new_name: &str, dry_run: bool) -> Result<PathBuf> {
    let failure = |to: PathBuf, reason: String| RenameError::DirectoryRename {
        from: dir.to_path_buf(),
        to,
        reason,
    };

    let parent = dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| failure(PathBuf::from(new_name), "directory has no parent".into()))?;
    let target = parent.join(new_name);

    if !dir.is_dir() {
        return Err(failure(target, "source directory does not exist".into()));
    }

    // fs::rename happily replaces an empty directory on Unix.
    if target.exists() {
        return Err(failure(target, "target already exists".into()));
    }

    if dry_run {
        log::info!("Would rename: {} → {}", dir.display(), target.display());
        return Ok(target);
    }

    fs::rename(dir, &target).map_err(|e| failure(target.clone(), e.to_string()))?;
    log::info!("Renamed: {} → {}", dir.display(), target.display());

    Ok(target)
}
