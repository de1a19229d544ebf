//! Rename configuration.
//!
//! Values come from three layers, highest precedence first: command-line
//! flags, an optional TOML file, then the defaults below.
//!
//! ## File format
//!
//! ```toml
//! [rename]
//! old-name = "my-project"
//! owner = "octocat"
//! host = "github.com"
//! remote = "origin"
//! primary-manifest = "pyproject.toml"
//! secondary-manifest = "setup.py"
//! ```

use crate::error::{RenameError, Result};
use std::fs;
use std::path::Path;
use toml_edit::{DocumentMut, Item};

pub const DEFAULT_HOST: &str = "github.com";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_PRIMARY_MANIFEST: &str = "pyproject.toml";
pub const DEFAULT_SECONDARY_MANIFEST: &str = "setup.py";

const KNOWN_KEYS: &[&str] = &[
    "old-name",
    "owner",
    "host",
    "remote",
    "primary-manifest",
    "secondary-manifest",
];

/// Settings that used to be baked into the rename script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    /// Expected current project name. Inferred from the directory when `None`.
    pub old_name: Option<String>,
    /// Owner segment of the remote URL. Remote repoint is skipped when `None`.
    pub owner: Option<String>,
    pub host: String,
    pub remote: String,
    pub primary_manifest: String,
    pub secondary_manifest: String,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            old_name: None,
            owner: None,
            host: DEFAULT_HOST.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            primary_manifest: DEFAULT_PRIMARY_MANIFEST.to_string(),
            secondary_manifest: DEFAULT_SECONDARY_MANIFEST.to_string(),
        }
    }
}

impl RenameConfig {
    /// Loads a config file on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RenameError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses the `[rename]` table of a TOML document.
    ///
    /// A document without a `[rename]` table yields the defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let doc = content.parse::<DocumentMut>()?;
        let mut config = Self::default();

        let Some(item) = doc.get("rename") else {
            return Ok(config);
        };
        let table = item
            .as_table_like()
            .ok_or_else(|| RenameError::Config("'rename' must be a table".to_string()))?;

        for (key, value) in table.iter() {
            if !KNOWN_KEYS.contains(&key) {
                log::warn!("Ignoring unknown configuration key 'rename.{}'", key);
                continue;
            }

            let value = string_value(key, value)?;
            match key {
                "old-name" => config.old_name = Some(value),
                "owner" => config.owner = Some(value),
                "host" => config.host = value,
                "remote" => config.remote = value,
                "primary-manifest" => config.primary_manifest = value,
                "secondary-manifest" => config.secondary_manifest = value,
                _ => unreachable!("key checked against KNOWN_KEYS"),
            }
        }

        Ok(config)
    }

    /// Builds the remote URL for `name`, if an owner is configured.
    pub fn remote_url(&self, name: &str) -> Option<String> {
        self.owner
            .as_ref()
            .map(|owner| format!("https://{}/{}/{}.git", self.host, owner, name))
    }
}

fn string_value(key: &str, item: &Item) -> Result<String> {
    item.as_str().map(str::to_string).ok_or_else(|| {
        RenameError::Config(format!("'rename.{}' must be a string", key))
    })
}
