//! Build configuration for the Fourier Animator project.
//!
//! A single [`BuildConfig`] value describes everything the build needs:
//! where sources live, where artifacts go, and which toolchain to drive.
//! It is constructed once per invocation (usually via [`Default`]) and
//! passed by reference to every component; nothing reads ambient state,
//! so tests construct alternate configurations freely.
//!
//! # Example
//!
//! ```rust
//! use fourier_build::config::BuildConfig;
//!
//! let config = BuildConfig::default();
//! assert_eq!(config.exe_name, "Fourier.exe");
//! assert_eq!(config.exe_path(), std::path::PathBuf::from("build").join("Fourier.exe"));
//! ```

use std::path::PathBuf;

/// Build configuration settings.
///
/// A pure data holder: paths are not validated here, invalid ones surface
/// as failures in whichever component touches them first.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory containing the C sources.
    pub src_dir: PathBuf,
    /// Header search path handed to the compiler.
    pub include_dir: PathBuf,
    /// Directory containing the import library and the runtime DLL.
    pub lib_dir: PathBuf,
    /// Directory receiving every generated artifact. Fully disposable.
    pub build_dir: PathBuf,
    /// Source file names, compiled in this order.
    pub sources: Vec<String>,
    /// Name of the produced executable.
    pub exe_name: String,
    /// Toolchain entry point.
    pub compiler: String,
    /// Import library linked into the executable.
    pub runtime_lib: String,
    /// Shared library the executable loads at startup; staged next to it.
    pub runtime_dll: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("src"),
            include_dir: PathBuf::from("includes"),
            lib_dir: PathBuf::from("libs"),
            build_dir: PathBuf::from("build"),
            sources: vec![
                "main.c".to_string(),
                "fourier.c".to_string(),
                "shapes.c".to_string(),
                "ui.c".to_string(),
            ],
            exe_name: "Fourier.exe".to_string(),
            compiler: "cl".to_string(),
            runtime_lib: "raylibdll.lib".to_string(),
            runtime_dll: "raylib.dll".to_string(),
        }
    }
}

impl BuildConfig {
    /// Full path of the executable this build produces.
    pub fn exe_path(&self) -> PathBuf {
        self.build_dir.join(&self.exe_name)
    }

    /// Full paths of the source files, in compile order.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.sources.iter().map(|s| self.src_dir.join(s)).collect()
    }
}
