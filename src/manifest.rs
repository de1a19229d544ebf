//! Project name substitution in manifest files.
//!
//! Two manifests carry the project name:
//!
//! - **Primary** (`pyproject.toml` by default): `name = "<name>"`, double
//!   quotes and spaced equals only.
//! - **Secondary** (`setup.py` by default): `name='<name>'` or
//!   `name="<name>"`, always rewritten with single quotes.
//!
//! Only the first occurrence is replaced. Names are matched literally.

use crate::error::Result;
use crate::fs::{FilePatch, patch_file};
use regex::{NoExpand, Regex};
use std::path::Path;

/// Which manifest flavour a file follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Primary,
    Secondary,
}

impl ManifestKind {
    fn pattern(self, old_name: &str) -> Result<Regex> {
        let old = regex::escape(old_name);
        let pattern = match self {
            ManifestKind::Primary => format!(r#"\bname = "{}""#, old),
            ManifestKind::Secondary => format!(r#"\bname=(?:'{0}'|"{0}")"#, old),
        };
        Ok(Regex::new(&pattern)?)
    }

    fn replacement(self, new_name: &str) -> String {
        match self {
            ManifestKind::Primary => format!(r#"name = "{}""#, new_name),
            ManifestKind::Secondary => format!("name='{}'", new_name),
        }
    }

    /// Returns true if `content` declares `name`.
    pub fn declares(self, content: &str, name: &str) -> Result<bool> {
        Ok(self.pattern(name)?.is_match(content))
    }

    /// Replaces the first name declaration in `content`.
    ///
    /// Returns `None` if `content` does not declare `old_name`.
    pub fn rename_in(self, content: &str, old_name: &str, new_name: &str) -> Result<Option<String>> {
        let pattern = self.pattern(old_name)?;
        if !pattern.is_match(content) {
            return Ok(None);
        }

        let replacement = self.replacement(new_name);
        Ok(Some(
            pattern
                .replacen(content, 1, NoExpand(&replacement))
                .into_owned(),
        ))
    }
}

/// Patches the manifest at `path`, if it exists.
pub fn patch_manifest(
    path: &Path,
    kind: ManifestKind,
    old_name: &str,
    new_name: &str,
    dry_run: bool,
) -> Result<FilePatch> {
    patch_file(path, dry_run, |content| {
        kind.rename_in(content, old_name, new_name)
    })
}
