//! Fourier Animator build runner CLI
//!
//! Drives the MSVC toolchain to build the Fourier Animator (a raylib
//! graphics application) and stages the raylib DLL next to the produced
//! executable.
//!
//! # Usage
//!
//! ```bash
//! # Build and run (Debug)
//! fourier-build
//!
//! # Build and run with optimizations
//! fourier-build --release
//!
//! # Build only
//! fourier-build --build
//!
//! # Remove build artifacts
//! fourier-build --clean
//!
//! # Clean, build, and run
//! fourier-build --rebuild
//! ```

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};

use fourier_build::clean::{self, CleanOutcome};
use fourier_build::compile::{self, BuildMode, BuildOutcome};
use fourier_build::config::BuildConfig;
use fourier_build::launch::{self, RunOutcome};

#[derive(Parser)]
#[command(name = "fourier-build")]
#[command(author, version, about = "Build runner for the Fourier Animator", long_about = None)]
#[command(group = ArgGroup::new("action").args(["run", "build", "clean", "rebuild"]))]
struct Cli {
    /// Build and run (default)
    #[arg(short = 'r', long)]
    run: bool,

    /// Build only, don't run
    #[arg(short = 'b', long)]
    build: bool,

    /// Clean build artifacts
    #[arg(short = 'c', long)]
    clean: bool,

    /// Clean, build, and run
    #[arg(long)]
    rebuild: bool,

    /// Build with optimizations
    #[arg(long)]
    release: bool,
}

/// Requested top-level action, decided once at the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Clean,
    Build,
    Run,
    Rebuild,
}

impl Cli {
    fn action(&self) -> Action {
        if self.clean {
            Action::Clean
        } else if self.rebuild {
            Action::Rebuild
        } else if self.build {
            Action::Build
        } else {
            // --run, or no action flag at all
            Action::Run
        }
    }

    fn mode(&self) -> BuildMode {
        if self.release {
            BuildMode::Release
        } else {
            BuildMode::Debug
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = BuildConfig::default();
    let mode = cli.mode();

    let result = match cli.action() {
        Action::Clean => cmd_clean(&config),
        Action::Build => cmd_build(&config, mode),
        Action::Run => cmd_run(&config, mode),
        Action::Rebuild => cmd_rebuild(&config, mode),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// `--clean`: remove everything the build ever produced.
fn cmd_clean(config: &BuildConfig) -> Result<()> {
    println!("==> Cleaning");
    match clean::clean(config)? {
        CleanOutcome::Removed(dir) => println!("Removed {}/", dir.display()),
        CleanOutcome::Missing => println!("  Nothing to clean"),
    }
    Ok(())
}

/// `--build`: produce the executable without launching it.
fn cmd_build(config: &BuildConfig, mode: BuildMode) -> Result<()> {
    build_step(config, mode)?;
    Ok(())
}

/// Default action: build, then launch.
fn cmd_run(config: &BuildConfig, mode: BuildMode) -> Result<()> {
    if !build_step(config, mode)? {
        // user stopped the compiler; nothing to launch
        return Ok(());
    }
    run_step(config)
}

/// `--rebuild`: clean slate, then the default build-and-run pass.
fn cmd_rebuild(config: &BuildConfig, mode: BuildMode) -> Result<()> {
    cmd_clean(config)?;
    cmd_run(config, mode)
}

/// Shared build step. `Ok(true)` means the executable was produced,
/// `Ok(false)` that the user stopped the toolchain before completion.
fn build_step(config: &BuildConfig, mode: BuildMode) -> Result<bool> {
    println!("==> Building ({})", mode.name());

    match compile::build(config, mode)? {
        BuildOutcome::Built { elapsed, size } => {
            println!("Build completed in {:.2}s", elapsed.as_secs_f64());
            println!(
                "  Output: {} ({:.1} KB)",
                config.exe_path().display(),
                size as f64 / 1024.0
            );
            Ok(true)
        }
        BuildOutcome::Failed { stdout, stderr } => {
            // compiler diagnostics go to the operator untouched
            if !stdout.is_empty() {
                print!("{stdout}");
            }
            if !stderr.is_empty() {
                eprint!("{stderr}");
            }
            bail!("build failed");
        }
        BuildOutcome::Interrupted => {
            println!("  Interrupted by user");
            Ok(false)
        }
    }
}

fn run_step(config: &BuildConfig) -> Result<()> {
    println!("==> Running");

    match launch::run(config)? {
        RunOutcome::Completed => Ok(()),
        RunOutcome::Interrupted => {
            println!("  Interrupted by user");
            Ok(())
        }
        RunOutcome::Failed { status } => bail!("application exited with error ({status})"),
    }
}
