//! Launching the built executable.
//!
//! The application owns the terminal while it runs: streams are inherited,
//! and the tool blocks until the window is closed, the process fails, or
//! the user hits Ctrl+C.

use std::process::{Command, ExitStatus};

use crate::config::BuildConfig;
use crate::error::ToolError;
use crate::interrupt::{self, InterruptGuard};

/// Outcome of launching the application.
#[derive(Debug)]
pub enum RunOutcome {
    /// The application exited cleanly.
    Completed,
    /// The application exited non-zero. An application problem, not a
    /// build problem; nothing on disk is affected.
    Failed { status: ExitStatus },
    /// The user stopped the application with Ctrl+C. Counts as success;
    /// interactive graphics windows are commonly closed this way.
    Interrupted,
}

/// Launch the built executable and wait for it to finish.
///
/// The executable must already exist; a missing one is reported without
/// attempting to spawn anything.
pub fn run(config: &BuildConfig) -> Result<RunOutcome, ToolError> {
    let exe = config.exe_path();

    if !exe.exists() {
        return Err(ToolError::ExecutableNotFound { path: exe });
    }

    println!("  Launching {}...", config.exe_name);
    println!();

    let guard = InterruptGuard::new();
    let status = Command::new(&exe).status();
    drop(guard);

    let status = status.map_err(|source| ToolError::LaunchFailed { path: exe, source })?;

    if interrupt::stopped_by_user(status) {
        return Ok(RunOutcome::Interrupted);
    }

    if status.success() {
        Ok(RunOutcome::Completed)
    } else {
        Ok(RunOutcome::Failed { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_in(root: &Path) -> BuildConfig {
        let mut config = BuildConfig::default();
        config.build_dir = root.join("build");
        config
    }

    #[cfg(unix)]
    fn install_fake_exe(config: &BuildConfig, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        fs::create_dir_all(&config.build_dir).unwrap();
        let exe = config.exe_path();
        fs::write(&exe, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_missing_executable_is_reported_before_spawning() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());

        match run(&config) {
            Err(ToolError::ExecutableNotFound { path }) => {
                assert_eq!(path, config.exe_path());
            }
            other => panic!("expected ExecutableNotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_exit_completes() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        install_fake_exe(&config, "exit 0");

        match run(&config).unwrap() {
            RunOutcome::Completed => {}
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_an_application_failure() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        install_fake_exe(&config, "exit 3");

        match run(&config).unwrap() {
            RunOutcome::Failed { status } => assert_eq!(status.code(), Some(3)),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
