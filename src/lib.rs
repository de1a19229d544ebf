#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod steps;
pub mod vcs;
pub mod verify;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::{CommandFactory, Parser};
    use colored::Colorize;

    let cli = cli::Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .init();

    if cli.new_name.as_deref().is_none_or(str::is_empty) {
        eprintln!("{}", cli::Cli::command().render_usage());
        return Err(RenameError::MissingArgument);
    }

    let config = cli.rename_config()?;
    let project_dir = match &cli.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let report = steps::execute(&project_dir, cli.new_name.as_deref(), &config, cli.dry_run)?;
    report.print_summary();

    if !report.dry_run {
        println!(
            "{:>12} cd {}",
            "Next".cyan().bold(),
            report.new_dir.display()
        );
    }

    if cli.strict && report.has_failures() {
        let failed = report
            .steps()
            .iter()
            .filter(|(_, outcome)| outcome.is_failed())
            .count();
        return Err(RenameError::Other(anyhow::anyhow!(
            "{} step(s) failed",
            failed
        )));
    }

    Ok(())
}
