//! In-place text patching.

use crate::error::{RenameError, Result};
use std::fs;
use std::path::Path;

/// What happened to a file handed to [`patch_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePatch {
    /// The file does not exist.
    Missing,
    /// The file exists but the edit produced no change.
    Unchanged,
    /// The file was (or, in dry-run mode, would be) rewritten.
    Patched,
}

/// Rewrites `path` with the result of `edit`.
///
/// `edit` receives the current content and returns the new content, or
/// `None` when there is nothing to change. Bytes outside the edit are
/// preserved because the file is written back verbatim.
pub fn patch_file<F>(path: &Path, dry_run: bool, edit: F) -> Result<FilePatch>
where
    F: FnOnce(&str) -> Result<Option<String>>,
{
    if !path.is_file() {
        log::debug!("No file at {}, skipping", path.display());
        return Ok(FilePatch::Missing);
    }

    let original = fs::read_to_string(path).map_err(|e| {
        RenameError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;

    let updated = match edit(&original)? {
        Some(updated) if updated != original => updated,
        _ => {
            log::debug!("File content unchanged, skipping: {}", path.display());
            return Ok(FilePatch::Unchanged);
        }
    };

    if dry_run {
        log::info!("Would update: {}", path.display());
    } else {
        fs::write(path, updated).map_err(|e| {
            RenameError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write {}: {}", path.display(), e),
            ))
        })?;
        log::debug!("Updated: {}", path.display());
    }

    Ok(FilePatch::Patched)
}
