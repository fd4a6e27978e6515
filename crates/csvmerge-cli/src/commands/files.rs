// Rust guideline compliant 2026-10-19

//! Implementation of the `csvmerge files` command.

use csvmerge_app::{Result, RunContext};
use std::path::PathBuf;

/// Lists the candidate input files of the working directory.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read.
pub fn execute(ctx: &RunContext) -> Result<Vec<PathBuf>> {
    ctx.candidates()
}
