//! Compiler invocation.
//!
//! Builds the `cl` argument vector for the selected mode, makes sure the
//! build directory and the staged DLL are in place, then runs the compiler
//! synchronously with both streams captured. A non-zero compiler exit is
//! data, not an error: the captured output travels back to the caller
//! verbatim and the caller decides the process exit code.

use std::ffi::OsString;
use std::fs;
use std::process::Command;
use std::time::{Duration, Instant};

use crate::config::BuildConfig;
use crate::error::ToolError;
use crate::interrupt::{self, InterruptGuard};
use crate::stage::{self, StageOutcome};

/// Compiler flag selection. Exactly one mode is active per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// All warnings as errors, debug symbols. The default.
    Debug,
    /// Optimized, debug assertions disabled.
    Release,
}

impl BuildMode {
    /// Display name used in progress output.
    pub fn name(self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
        }
    }
}

/// Result of one build attempt. Not persisted; it only decides whether
/// dependent steps proceed.
#[derive(Debug)]
pub enum BuildOutcome {
    /// The compiler succeeded.
    Built {
        /// Wall-clock time of the compiler invocation.
        elapsed: Duration,
        /// Size of the produced executable in bytes.
        size: u64,
    },
    /// The compiler exited non-zero; both streams captured verbatim.
    Failed { stdout: String, stderr: String },
    /// The compiler was stopped by the user.
    Interrupted,
}

/// Argument vector for one compiler invocation.
///
/// Order is what `cl` expects: include path, object and executable output
/// locations (both rooted in the build directory), banner suppression,
/// mode flags, sources in compile order, import library.
pub fn compiler_args(config: &BuildConfig, mode: BuildMode) -> Vec<OsString> {
    let mut args = Vec::new();

    let mut include = OsString::from("/I");
    include.push(config.include_dir.as_os_str());
    args.push(include);

    let mut obj_out = OsString::from("/Fo");
    obj_out.push(config.build_dir.as_os_str());
    obj_out.push("\\");
    args.push(obj_out);

    let mut exe_out = OsString::from("/Fe");
    exe_out.push(config.build_dir.as_os_str());
    exe_out.push("\\");
    exe_out.push(&config.exe_name);
    args.push(exe_out);

    args.push("/nologo".into());

    match mode {
        BuildMode::Release => args.extend(["/O2".into(), "/DNDEBUG".into()]),
        BuildMode::Debug => args.extend(["/W4".into(), "/WX".into(), "/Zi".into()]),
    }

    args.extend(config.source_paths().into_iter().map(|p| p.into_os_string()));
    args.push(config.lib_dir.join(&config.runtime_lib).into_os_string());

    args
}

/// Compile the project.
///
/// Creates the build directory if needed, stages the runtime DLL (a
/// staging failure aborts before the compiler runs), then invokes the
/// toolchain and times it. Invocation is never retried.
pub fn build(config: &BuildConfig, mode: BuildMode) -> Result<BuildOutcome, ToolError> {
    fs::create_dir_all(&config.build_dir).map_err(|source| ToolError::BuildDirFailed {
        dir: config.build_dir.clone(),
        source,
    })?;

    if stage::stage(config)? == StageOutcome::Copied {
        println!("  Copied {}", config.runtime_dll);
    }

    println!("  Compiling {} source files...", config.sources.len());

    let start = Instant::now();
    let guard = InterruptGuard::new();
    let output = Command::new(&config.compiler)
        .args(compiler_args(config, mode))
        .output();
    drop(guard);
    let elapsed = start.elapsed();

    let output = output.map_err(|source| ToolError::CompilerNotFound {
        compiler: config.compiler.clone(),
        source,
    })?;

    if interrupt::stopped_by_user(output.status) {
        return Ok(BuildOutcome::Interrupted);
    }

    if !output.status.success() {
        return Ok(BuildOutcome::Failed {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let size = fs::metadata(config.exe_path()).map(|m| m.len()).unwrap_or(0);
    Ok(BuildOutcome::Built { elapsed, size })
}
