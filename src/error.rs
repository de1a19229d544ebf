//! Error types for project-rename.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from rename operations.
#[derive(Debug, Error)]
pub enum RenameError {
    /// No new project name was supplied.
    #[error("Missing required argument: NEW_NAME")]
    MissingArgument,

    /// Invalid project name.
    #[error("Invalid project name '{0}': {1}")]
    InvalidName(String, String),

    /// Current directory is not the project to rename.
    #[error("Wrong directory '{actual}': {reason}")]
    WrongDirectory { actual: String, reason: String },

    /// Renaming the project directory failed.
    ///
    /// Fatal: every later step depends on the renamed directory.
    #[error("Failed to rename {} to {}: {reason}", from.display(), to.display())]
    DirectoryRename {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    /// Configuration file could not be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for project-rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;
