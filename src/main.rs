//! Binary entry point for `project-rename`.

use std::process;

fn main() {
    if let Err(e) = project_rename::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
