//! The rename workflow and its outcome report.

pub mod rename;
pub mod report;

pub use rename::execute;
pub use report::{RenameReport, Step, StepOutcome};
