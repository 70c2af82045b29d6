//! Error types for resource bundling and release packaging.
//!
//! Every failure propagates to the binary entry point; nothing is recovered
//! locally.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for release tooling operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all bundling and packaging operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// A required source file is absent at copy/add time
    #[error("Missing source file: {}", path.display())]
    MissingSource {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// External release artifacts are missing at package time
    #[error("Missing release artifacts: {}", format_paths(paths))]
    MissingArtifacts {
        /// Every absent artifact path
        paths: Vec<PathBuf>,
    },

    /// Filesystem failure with the operation and path attached
    #[error("{context} {}: {source}", path.display())]
    Io {
        /// What was being done
        context: String,
        /// Path the operation touched
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// An existing release number leaves no larger `u32` to use
    #[error("Release {name} leaves no higher version number")]
    VersionOutOfRange {
        /// File name of the offending release
        name: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {reason}")]
    Config {
        /// Reason for the error
        reason: String,
    },

    /// Zip writer errors
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Atomic rename of a staged archive failed
    #[error("Failed to move archive into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Directory traversal errors
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Attaches filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wraps the error with the operation being performed and the path involved.
    fn fs_context(self, context: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn fs_context(self, context: &str, path: &Path) -> Result<T> {
        self.map_err(|source| ReleaseError::Io {
            context: context.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ReleaseError {
    /// Builds a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
