//! Orchestration of a project rename.
//!
//! ## Steps
//!
//! 1. Rename the project directory (fatal on failure)
//! 2. Patch the primary manifest
//! 3. Patch the secondary manifest
//! 4. Repoint the git remote
//!
//! Steps 2-4 are best effort: a failure is recorded in the report and the
//! next step still runs. Nothing is rolled back.

use crate::config::RenameConfig;
use crate::error::Result;
use crate::fs::{FilePatch, rename_directory};
use crate::manifest::{ManifestKind, patch_manifest};
use crate::steps::report::{RenameReport, Step, StepOutcome};
use crate::vcs;
use crate::verify::{require_new_name, resolve_old_name};
use std::path::Path;

/// Renames the project at `project_dir` to `new_name`.
///
/// Pre-flight checks run first; if any fails, nothing is touched. With
/// `dry_run` every check and step runs without writing anything.
///
/// # Errors
///
/// - `MissingArgument` / `InvalidName` for a bad `new_name`
/// - `WrongDirectory` if `project_dir` is not named as expected
/// - `DirectoryRename` if step 1 fails
pub fn execute(
    project_dir: &Path,
    new_name: Option<&str>,
    config: &RenameConfig,
    dry_run: bool,
) -> Result<RenameReport> {
    let new_name = require_new_name(new_name)?;
    let project_dir = std::path::absolute(project_dir)?;
    let old_name = resolve_old_name(&project_dir, config, new_name)?;

    log::debug!("Project '{}' at: {}", old_name, project_dir.display());

    let new_dir = rename_directory(&project_dir, new_name, dry_run)?;
    let mut report = RenameReport::new(
        old_name.clone(),
        new_name.to_string(),
        new_dir.clone(),
        dry_run,
    );
    report.record(
        Step::RenameDirectory,
        StepOutcome::Completed(format!("Renamed directory {} → {}", old_name, new_name)),
    );

    // In dry-run mode nothing moved, so the files are still in the old place.
    let working_dir = if dry_run { &project_dir } else { &new_dir };

    for (step, kind, file_name) in [
        (
            Step::PrimaryManifest,
            ManifestKind::Primary,
            &config.primary_manifest,
        ),
        (
            Step::SecondaryManifest,
            ManifestKind::Secondary,
            &config.secondary_manifest,
        ),
    ] {
        let outcome = manifest_step(working_dir, file_name, kind, &old_name, new_name, dry_run);
        report.record(step, outcome);
    }

    let outcome = remote_step(working_dir, config, new_name, dry_run);
    report.record(Step::RepointRemote, outcome);

    Ok(report)
}

fn manifest_step(
    dir: &Path,
    file_name: &str,
    kind: ManifestKind,
    old_name: &str,
    new_name: &str,
    dry_run: bool,
) -> StepOutcome {
    let path = dir.join(file_name);

    match patch_manifest(&path, kind, old_name, new_name, dry_run) {
        Ok(FilePatch::Patched) => StepOutcome::Completed(format!(
            "Updated {} name {} → {}",
            file_name, old_name, new_name
        )),
        Ok(FilePatch::Missing) => StepOutcome::Skipped(format!("{} not found", file_name)),
        Ok(FilePatch::Unchanged) => {
            StepOutcome::Skipped(format!("{} does not declare '{}'", file_name, old_name))
        }
        Err(e) => StepOutcome::Failed(e.to_string()),
    }
}

fn remote_step(dir: &Path, config: &RenameConfig, new_name: &str, dry_run: bool) -> StepOutcome {
    if !vcs::git_available() {
        return StepOutcome::Skipped("git is not installed".to_string());
    }

    if !vcs::is_repository_root(dir) {
        return StepOutcome::Skipped("not a git repository".to_string());
    }

    let Some(url) = config.remote_url(new_name) else {
        return StepOutcome::Failed(format!(
            "no remote owner configured; remote '{}' left unchanged (use --owner)",
            config.remote
        ));
    };

    if dry_run {
        return StepOutcome::Completed(format!("Set remote '{}' to {}", config.remote, url));
    }

    match vcs::set_remote_url(dir, &config.remote, &url) {
        Ok(()) => StepOutcome::Completed(format!("Set remote '{}' to {}", config.remote, url)),
        Err(e) => StepOutcome::Failed(e.to_string()),
    }
}
