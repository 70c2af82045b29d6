//! File system utilities for bundling.
//!
//! Idempotent removal and verbatim copies with path context on every error.

use crate::error::{ErrorExt, ReleaseError, Result};
use std::{io, path::Path};

/// Removes a file if it exists.
///
/// Absence is not an error.
pub fn remove_file(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            log::debug!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing", path),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails with [`ReleaseError::MissingSource`] if the source doesn't exist
/// or is not a file.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    if !from.is_file() {
        return Err(ReleaseError::MissingSource {
            path: from.to_path_buf(),
        });
    }
    if let Some(dest_dir) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dest_dir).fs_context("creating directory", dest_dir)?;
    }
    std::fs::copy(from, to).fs_context("copying to", to)
}

/// Creates the directory and its parents unless it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    log::warn!("Creating missing directory {}", path.display());
    std::fs::create_dir_all(path).fs_context("creating directory", path)
}
