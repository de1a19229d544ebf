//! File system operations used by the rename steps.
//!
//! Every function takes explicit paths. The process working directory is
//! never changed, so a renamed project stays reachable through the path
//! returned by [`rename_directory`].

pub mod directory;
pub mod patch;

pub use directory::rename_directory;
pub use patch::{FilePatch, patch_file};
