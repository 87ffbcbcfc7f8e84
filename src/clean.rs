//! Build directory removal.
//!
//! Everything under the build directory is generated, so cleaning is a
//! whole-tree removal, never a partial one.

use std::fs;
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::error::ToolError;

/// Outcome of a clean pass.
#[derive(Debug, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The build directory and everything beneath it was removed.
    Removed(PathBuf),
    /// There was no build directory to remove.
    Missing,
}

/// Remove the build directory tree, if there is one.
///
/// Idempotent: a second call finds nothing, reports
/// [`CleanOutcome::Missing`] and touches nothing.
pub fn clean(config: &BuildConfig) -> Result<CleanOutcome, ToolError> {
    if !config.build_dir.exists() {
        return Ok(CleanOutcome::Missing);
    }

    fs::remove_dir_all(&config.build_dir).map_err(|source| ToolError::CleanFailed {
        dir: config.build_dir.clone(),
        source,
    })?;

    Ok(CleanOutcome::Removed(config.build_dir.clone()))
}
