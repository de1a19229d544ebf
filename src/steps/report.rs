//! Per-step outcomes of a rename.

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

/// The four rename steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    RenameDirectory,
    PrimaryManifest,
    SecondaryManifest,
    RepointRemote,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::RenameDirectory => "directory rename",
            Step::PrimaryManifest => "primary manifest",
            Step::SecondaryManifest => "secondary manifest",
            Step::RepointRemote => "remote repoint",
        };
        f.write_str(label)
    }
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step ran; carries a short description of what changed.
    Completed(String),
    /// The step's precondition did not hold (file absent, no repository).
    Skipped(String),
    /// The step was attempted and failed. Later steps still ran.
    Failed(String),
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }
}

/// Everything a rename did, one entry per step.
#[derive(Debug, Clone)]
pub struct RenameReport {
    pub old_name: String,
    pub new_name: String,
    /// Location of the project after the rename.
    pub new_dir: PathBuf,
    pub dry_run: bool,
    steps: Vec<(Step, StepOutcome)>,
}

impl RenameReport {
    pub fn new(old_name: String, new_name: String, new_dir: PathBuf, dry_run: bool) -> Self {
        Self {
            old_name,
            new_name,
            new_dir,
            dry_run,
            steps: Vec::with_capacity(4),
        }
    }

    pub fn record(&mut self, step: Step, outcome: StepOutcome) {
        match &outcome {
            StepOutcome::Completed(detail) => log::debug!("{}: {}", step, detail),
            StepOutcome::Skipped(reason) => log::info!("Skipped {}: {}", step, reason),
            StepOutcome::Failed(reason) => log::error!("{} failed: {}", step, reason),
        }
        self.steps.push((step, outcome));
    }

    pub fn steps(&self) -> &[(Step, StepOutcome)] {
        &self.steps
    }

    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| outcome)
    }

    pub fn has_failures(&self) -> bool {
        self.steps.iter().any(|(_, outcome)| outcome.is_failed())
    }

    /// Prints one line per completed or failed step, then a banner.
    ///
    /// Skipped steps print nothing.
    pub fn print_summary(&self) {
        let label = if self.dry_run { "Pending" } else { "Done" };

        for (step, outcome) in &self.steps {
            match outcome {
                StepOutcome::Completed(detail) => {
                    if self.dry_run {
                        println!("{:>12} {}", label.blue().bold(), detail);
                    } else {
                        println!("{:>12} {}", label.green().bold(), detail);
                    }
                }
                StepOutcome::Failed(reason) => {
                    eprintln!("{:>12} {}: {}", "Failed".red().bold(), step, reason);
                }
                StepOutcome::Skipped(_) => {}
            }
        }

        if self.dry_run {
            println!(
                "\n{} Run without {} to apply.",
                "DRY RUN - No changes were made.".yellow().bold(),
                "--dry-run".cyan()
            );
            return;
        }

        println!(
            "\n{} {} → {}",
            "✓ Successfully renamed".green().bold(),
            self.old_name.yellow(),
            self.new_name.green().bold()
        );

        if self.has_failures() {
            println!(
                "{}",
                "⚠ Some steps failed; see the messages above.".yellow().bold()
            );
        }
    }
}
