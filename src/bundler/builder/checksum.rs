//! Artifact checksum calculation.
//!
//! SHA-256 of a release archive, read in 8KB chunks.

use crate::error::{ErrorExt, Result};
use sha2::{Digest, Sha256};
use std::{io::Read, path::Path};

/// Calculates the hex-encoded SHA-256 checksum of a file.
///
/// # Arguments
///
/// * `path` - Path to file to hash
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If the file cannot be read
pub fn calculate_sha256(path: &Path) -> Result<String> {
    let mut file = std::fs::File::open(path).fs_context("opening file for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
