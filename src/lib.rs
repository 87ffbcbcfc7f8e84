//! Fourier Animator build runner library.
//!
//! Components compose in dependency order: [`config`] describes the build,
//! [`stage`] keeps the runtime DLL current, [`compile`] drives the MSVC
//! toolchain, [`clean`] disposes of generated artifacts and [`launch`]
//! runs the result. The binary wires them into the clean / build / run /
//! rebuild actions and maps outcomes to a process exit code.

pub mod clean;
pub mod compile;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod launch;
pub mod stage;
