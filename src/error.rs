//! Error taxonomy for the build runner.
//!
//! Every fatal component failure maps to one [`ToolError`] variant carrying
//! the failing subject and the underlying cause. A compiler or application
//! exiting non-zero is NOT an error here: the invoker and launcher report
//! those as outcome values and the orchestrator decides what they mean.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures reported by the build components.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The runtime DLL could not be staged into the build directory.
    #[error("failed to stage {file}: {source}")]
    StagingFailed { file: String, source: io::Error },

    /// The build directory could not be created.
    #[error("failed to create {}: {}", .dir.display(), .source)]
    BuildDirFailed { dir: PathBuf, source: io::Error },

    /// The toolchain entry point could not be spawned at all.
    #[error("failed to invoke compiler `{compiler}`: {source}")]
    CompilerNotFound { compiler: String, source: io::Error },

    /// The build directory could not be removed.
    #[error("failed to remove {}: {}", .dir.display(), .source)]
    CleanFailed { dir: PathBuf, source: io::Error },

    /// The expected executable was missing before launch.
    #[error("executable not found: {}", .path.display())]
    ExecutableNotFound { path: PathBuf },

    /// The built executable could not be spawned.
    #[error("failed to launch {}: {}", .path.display(), .source)]
    LaunchFailed { path: PathBuf, source: io::Error },
}
