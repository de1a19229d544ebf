use crate::config::RenameConfig;
use crate::error::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Rename a project directory, patch its manifests and repoint its git remote.
#[derive(Parser, Debug)]
#[command(name = "project-rename", version)]
pub struct Cli {
    /// New name of the project
    pub new_name: Option<String>,

    /// Expected current name (defaults to the directory name)
    #[arg(long, value_name = "OLD")]
    pub from: Option<String>,

    /// Owner used in the new remote URL
    #[arg(long)]
    pub owner: Option<String>,

    /// Host used in the new remote URL [default: github.com]
    #[arg(long)]
    pub host: Option<String>,

    /// Name of the git remote to repoint [default: origin]
    #[arg(long)]
    pub remote: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to the current directory)
    #[arg(long, short = 'C', value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Preview changes without applying them
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Exit with an error if any step fails
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merges flags over the config file (if any) over the defaults.
    pub fn rename_config(&self) -> Result<RenameConfig> {
        let mut config = match &self.config {
            Some(path) => RenameConfig::from_file(path)?,
            None => RenameConfig::default(),
        };

        if let Some(old_name) = &self.from {
            config.old_name = Some(old_name.clone());
        }
        if let Some(owner) = &self.owner {
            config.owner = Some(owner.clone());
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(remote) = &self.remote {
            config.remote = remote.clone();
        }

        Ok(config)
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
