//! Runtime DLL staging.
//!
//! The built executable loads the raylib DLL from its own directory, so the
//! DLL must be current in `build/` before the executable is linked against
//! it or launched. Copying happens only when the library-directory copy is
//! strictly newer than the staged one, or the staged one is missing;
//! repeated builds with an up-to-date build directory perform no I/O here.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::config::BuildConfig;
use crate::error::ToolError;

/// Outcome of a staging pass.
#[derive(Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// The DLL was (re)copied into the build directory.
    Copied,
    /// The staged copy is current; nothing was written.
    UpToDate,
}

/// Ensure the runtime DLL in the build directory is present and current.
///
/// The copy carries over the source modification time, keeping the
/// freshness comparison stable across repeated builds. Expects the build
/// directory to exist; the invoker creates it first.
pub fn stage(config: &BuildConfig) -> Result<StageOutcome, ToolError> {
    let src = config.lib_dir.join(&config.runtime_dll);
    let dst = config.build_dir.join(&config.runtime_dll);

    if !needs_copy(&src, &dst) {
        return Ok(StageOutcome::UpToDate);
    }

    copy_with_mtime(&src, &dst).map_err(|source| ToolError::StagingFailed {
        file: config.runtime_dll.clone(),
        source,
    })?;

    Ok(StageOutcome::Copied)
}

/// A copy is needed when the destination is missing or strictly older
/// than the source.
fn needs_copy(src: &Path, dst: &Path) -> bool {
    match (mtime(src), mtime(dst)) {
        (Some(src_time), Some(dst_time)) => src_time > dst_time,
        // Destination missing: copy, and let a missing source surface as
        // the staging error it is.
        (_, None) => true,
        // Destination staged but source unreadable: keep what we have.
        (None, Some(_)) => false,
    }
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

fn copy_with_mtime(src: &Path, dst: &Path) -> std::io::Result<()> {
    let modified = fs::metadata(src)?.modified()?;
    fs::copy(src, dst)?;
    fs::File::options().write(true).open(dst)?.set_modified(modified)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    fn config_in(root: &Path) -> BuildConfig {
        let mut config = BuildConfig::default();
        config.lib_dir = root.join("libs");
        config.build_dir = root.join("build");
        fs::create_dir_all(&config.lib_dir).unwrap();
        fs::create_dir_all(&config.build_dir).unwrap();
        config
    }

    fn dll_paths(config: &BuildConfig) -> (PathBuf, PathBuf) {
        (
            config.lib_dir.join(&config.runtime_dll),
            config.build_dir.join(&config.runtime_dll),
        )
    }

    #[test]
    fn test_copies_when_destination_missing() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        let (src, dst) = dll_paths(&config);
        fs::write(&src, b"v1").unwrap();

        assert_eq!(stage(&config).unwrap(), StageOutcome::Copied);
        assert_eq!(fs::read(&dst).unwrap(), b"v1");
        // copy carries the source mtime over
        assert_eq!(mtime(&dst).unwrap(), mtime(&src).unwrap());
    }

    #[test]
    fn test_no_write_when_up_to_date() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        let (_, dst) = dll_paths(&config);
        fs::write(tmp.path().join("libs/raylib.dll"), b"v1").unwrap();

        assert_eq!(stage(&config).unwrap(), StageOutcome::Copied);
        let staged_at = mtime(&dst).unwrap();

        assert_eq!(stage(&config).unwrap(), StageOutcome::UpToDate);
        assert_eq!(mtime(&dst).unwrap(), staged_at);
    }

    #[test]
    fn test_copies_when_source_strictly_newer() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        let (src, dst) = dll_paths(&config);
        fs::write(&src, b"v1").unwrap();
        stage(&config).unwrap();

        fs::write(&src, b"v2").unwrap();
        let newer = mtime(&dst).unwrap() + Duration::from_secs(2);
        fs::File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(newer)
            .unwrap();

        assert_eq!(stage(&config).unwrap(), StageOutcome::Copied);
        assert_eq!(fs::read(&dst).unwrap(), b"v2");
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());

        match stage(&config) {
            Err(ToolError::StagingFailed { file, .. }) => assert_eq!(file, "raylib.dll"),
            other => panic!("expected StagingFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_staged_copy_survives_missing_source() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());
        let (_, dst) = dll_paths(&config);
        fs::write(&dst, b"v1").unwrap();

        assert_eq!(stage(&config).unwrap(), StageOutcome::UpToDate);
        assert_eq!(fs::read(&dst).unwrap(), b"v1");
    }
}
