//! Release tooling for Urban Warfare.
//!
//! This library provides:
//! - the resource bundler, rebuilding `resources.dat` and `world.db3`
//! - the release packager, writing `urban_warfare_<NN>.zip`
//!
//! It backs the `build_resources` and `build_release` binaries and can be
//! used directly as a library.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{ReleaseError, Result};
