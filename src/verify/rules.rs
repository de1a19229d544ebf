//! Validation rules for project names.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{RenameError, Result};

const MAX_PROJECT_NAME_LENGTH: usize = 255;

/// Validates that `name` can serve as a project name.
///
/// The name becomes a directory name, a manifest field and a URL path
/// segment, so it must be a single path component.
///
/// ## Rules
/// - 1-255 bytes
/// - Not `.` or `..`
/// - No `/`, `\`, NUL or control characters
///
/// ## Warnings (non-fatal)
/// - Whitespace (awkward in URLs and shells)
/// - Quote characters (break the manifest name patterns)
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RenameError::InvalidName(
            name.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if name.len() > MAX_PROJECT_NAME_LENGTH {
        return Err(RenameError::InvalidName(
            name.to_string(),
            format!(
                "exceeds {} bytes (has {})",
                MAX_PROJECT_NAME_LENGTH,
                name.len()
            ),
        ));
    }

    if name == "." || name == ".." {
        return Err(RenameError::InvalidName(
            name.to_string(),
            "cannot be '.' or '..'".to_string(),
        ));
    }

    for (idx, ch) in name.chars().enumerate() {
        if ch == '/' || ch == '\\' {
            return Err(RenameError::InvalidName(
                name.to_string(),
                format!("path separator '{}' at position {}", ch, idx),
            ));
        }

        if ch.is_control() {
            return Err(RenameError::InvalidName(
                name.to_string(),
                format!("control character {:?} at position {}", ch, idx),
            ));
        }
    }

    if name.chars().any(char::is_whitespace) {
        log::warn!("'{}' contains whitespace", name);
    }

    if name.contains('\'') || name.contains('"') {
        log::warn!("'{}' contains quotes; manifests may not round-trip", name);
    }

    Ok(())
}
