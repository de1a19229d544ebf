//! Validation performed before any rename step runs.

pub mod preflight;
pub mod rules;

pub use preflight::{require_new_name, resolve_old_name};
pub use rules::validate_project_name;
