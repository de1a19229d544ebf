//! Pre-flight checks performed before executing a rename.
//!
//! These run before any mutation. Unlike `rules`, they may inspect the
//! file system.

use crate::config::RenameConfig;
use crate::error::{RenameError, Result};
use crate::manifest::ManifestKind;
use crate::vcs;
use crate::verify::rules::validate_project_name;
use std::fs;
use std::path::Path;

/// Returns the new project name, or `MissingArgument` if there is none.
pub fn require_new_name(new_name: Option<&str>) -> Result<&str> {
    let name = match new_name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(RenameError::MissingArgument),
    };

    validate_project_name(name)?;
    Ok(name)
}

/// Determines the current project name and checks `dir` carries it.
///
/// The expected name is `config.old_name` when set. Otherwise it is the base
/// name of `dir`, accepted only if one of the manifests declares it or `dir`
/// is the top of a git working tree. A directory already named `new_name`
/// is always rejected, so a rename cannot be replayed.
///
/// # Errors
///
/// Returns `WrongDirectory` if `dir` is not the project, and `InvalidName`
/// if the directory name is not valid UTF-8.
pub fn resolve_old_name(dir: &Path, config: &RenameConfig, new_name: &str) -> Result<String> {
    let actual = dir
        .file_name()
        .ok_or_else(|| {
            RenameError::InvalidName(
                dir.display().to_string(),
                "directory has no name".to_string(),
            )
        })?
        .to_str()
        .ok_or_else(|| {
            RenameError::InvalidName(
                dir.display().to_string(),
                "directory name is not valid UTF-8".to_string(),
            )
        })?
        .to_string();

    let wrong = |reason: String| RenameError::WrongDirectory {
        actual: actual.clone(),
        reason,
    };

    if actual == new_name {
        return Err(wrong(format!("already named '{}'", new_name)));
    }

    match &config.old_name {
        Some(expected) if *expected != actual => Err(wrong(format!(
            "expected a directory named '{}'",
            expected
        ))),
        Some(_) => Ok(actual),
        None if is_project_dir(dir, config, &actual) => {
            log::debug!("No old name configured, using directory name '{}'", actual);
            Ok(actual)
        }
        None => Err(wrong(format!(
            "neither {} nor {} declares '{}' and it is not a git repository root; pass --from to rename it anyway",
            config.primary_manifest, config.secondary_manifest, actual
        ))),
    }
}

/// Returns true if `dir` looks like the project called `name`.
fn is_project_dir(dir: &Path, config: &RenameConfig, name: &str) -> bool {
    let manifests = [
        (ManifestKind::Primary, &config.primary_manifest),
        (ManifestKind::Secondary, &config.secondary_manifest),
    ];

    for (kind, file_name) in manifests {
        let path = dir.join(file_name);
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        if kind.declares(&content, name).unwrap_or(false) {
            log::debug!("{} declares '{}'", path.display(), name);
            return true;
        }
    }

    vcs::is_repository_root(dir)
}
