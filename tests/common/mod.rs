//! Integration tests for project-rename
//!
//! These tests build real project directories in a temp dir and run the
//! binary against them.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

#[allow(unused)]
pub const PYPROJECT: &str = r#"[tool.poetry]
name = "old-project"
version = "0.1.0"
description = "Export highlights"
authors = ["Someone <someone@example.com>"]

[tool.poetry.dependencies]
python = "^3.11"
"#;

#[allow(unused)]
pub const SETUP_PY: &str = r#"from setuptools import setup

setup(
    name="old-project",
    version="0.1.0",
    packages=["pipeline"],
)
"#;

/// Helper to create a project directory with both manifests
#[allow(unused)]
pub fn create_test_project() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("old-project");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("pyproject.toml"), PYPROJECT).unwrap();
    fs::write(project.join("setup.py"), SETUP_PY).unwrap();
    fs::create_dir(project.join("pipeline")).unwrap();
    fs::write(project.join("pipeline/__init__.py"), "").unwrap();
    (temp, project)
}

#[allow(unused)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Runs git in `dir`, panicking on failure
#[allow(unused)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Helper to run the renamer inside `project_dir`
pub fn run_rename(project_dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("project-rename");
    cmd.args(args).current_dir(project_dir).env_remove("RUST_LOG");
    cmd.assert()
}
