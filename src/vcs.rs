//! Git remote handling.
//!
//! Shells out to the `git` binary. A missing `git` or a directory that is
//! not the top of a working tree is never an error: callers treat it as
//! "nothing to repoint".

use crate::error::{RenameError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Returns true if the `git` binary can be executed.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Returns true if `dir` is the top level of a git working tree.
///
/// A directory nested inside some other repository does not count: its
/// remote belongs to the enclosing project.
pub fn is_repository_root(dir: &Path) -> bool {
    let output = match Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()
    {
        Ok(output) if output.status.success() => output,
        Ok(_) => {
            log::debug!("Not a git repository: {}", dir.display());
            return false;
        }
        Err(e) => {
            log::debug!("Failed to execute git: {}", e);
            return false;
        }
    };

    let toplevel = String::from_utf8_lossy(&output.stdout);
    let toplevel = Path::new(toplevel.trim());

    match (toplevel.canonicalize(), dir.canonicalize()) {
        (Ok(top), Ok(dir)) => top == dir,
        _ => false,
    }
}

/// Returns the URL of `remote`, or `None` if it is not configured.
pub fn remote_url(dir: &Path, remote: &str) -> Result<Option<String>> {
    let output = git(dir, &["remote", "get-url", remote])?;
    if output.status.success() {
        Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
    } else {
        Ok(None)
    }
}

/// Points `remote` at `url`, creating the remote if needed.
///
/// Any previous URL is discarded.
pub fn set_remote_url(dir: &Path, remote: &str, url: &str) -> Result<()> {
    let previous = remote_url(dir, remote)?;

    let output = match &previous {
        Some(old) => {
            log::debug!("Replacing remote '{}' URL {}", remote, old);
            git(dir, &["remote", "set-url", remote, url])?
        }
        None => {
            log::debug!("Adding remote '{}'", remote);
            git(dir, &["remote", "add", remote, url])?
        }
    };

    if !output.status.success() {
        return Err(RenameError::Other(anyhow::anyhow!(
            "git could not set remote '{}': {}",
            remote,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    log::info!("Remote '{}' now points to {}", remote, url);
    Ok(())
}

fn git(dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| {
            RenameError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to execute git {}: {}", args.join(" "), e),
            ))
        })
}
