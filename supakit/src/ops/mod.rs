//! Core operations.
//!
//! This module contains the business logic for supakit commands,
//! separated from CLI argument parsing and output rendering.

pub mod extract;
pub mod generate;
pub mod stripe;
pub mod workspace;

pub use extract::extract;
pub use generate::generate;
pub use stripe::stripe;
pub use workspace::workspace;

use std::{path::Path, process::Command};

use eyre::{Result, WrapErr, bail};

/// Run an external tool in `dir`, inheriting stdio.
fn run_tool(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .wrap_err_with(|| format!("failed to run {}", program))?;

    if !status.success() {
        bail!("`{} {}` exited with {}", program, args.join(" "), status);
    }
    Ok(())
}
