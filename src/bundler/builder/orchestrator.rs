//! Release packaging orchestration.
//!
//! This module provides the [`ReleasePackager`] that picks the next version,
//! regenerates the resource bundle and writes the versioned release archive.

use crate::{
    bundler::{
        ArchiveWriter, DirectoryListing, PackagerConfig, PlannedRelease, ReleaseListing,
        plan_release, resources, utils::fs,
    },
    error::{ErrorExt, ReleaseError, Result},
};
use std::path::PathBuf;

use super::checksum::calculate_sha256;

/// A release archive written by [`ReleasePackager::package`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseArtifact {
    /// Location of the archive.
    pub path: PathBuf,
    /// Version number encoded in the file name.
    pub version: u32,
    /// Entry names, in manifest order.
    pub entries: Vec<String>,
    /// Size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive.
    pub checksum: String,
}

/// Release packager.
///
/// # Process
///
/// 1. Checks every external manifest source exists
/// 2. Picks the next version from the releases directory
/// 3. Rebuilds `resources.dat` and `world.db3` in the working directory
/// 4. Writes `<product>_<NN>.zip` with the manifest entries
///
/// # Examples
///
/// ```no_run
/// use urban_warfare_release::bundler::{PackagerConfigBuilder, ReleasePackager};
///
/// # fn example() -> urban_warfare_release::Result<()> {
/// let config = PackagerConfigBuilder::new().working_dir("game").build()?;
/// let artifact = ReleasePackager::new(config).package()?;
/// println!("{} (sha256 {})", artifact.path.display(), artifact.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReleasePackager {
    config: PackagerConfig,
}

impl ReleasePackager {
    /// Creates a packager for the given configuration.
    pub fn new(config: PackagerConfig) -> Self {
        Self { config }
    }

    /// Returns every external manifest source that does not exist.
    ///
    /// Generated entries are skipped; the resource bundler produces them.
    pub fn missing_artifacts(&self) -> Vec<PathBuf> {
        self.config
            .manifest()
            .iter()
            .filter(|entry| entry.kind.is_external())
            .map(|entry| entry.source_in(self.config.working_dir()))
            .filter(|path| !path.is_file())
            .collect()
    }

    /// Picks the next release from the configured releases directory.
    ///
    /// Read-only: a missing releases directory counts as holding no releases.
    pub fn plan(&self) -> Result<PlannedRelease> {
        let releases_dir = self.config.releases_dir();
        if !releases_dir.exists() {
            log::debug!("{} does not exist yet", releases_dir.display());
            return self.plan_with(&Vec::<String>::new());
        }
        self.plan_with(&DirectoryListing::new(&releases_dir))
    }

    /// Picks the next release from an arbitrary listing of release names.
    pub fn plan_with<L: ReleaseListing + ?Sized>(&self, listing: &L) -> Result<PlannedRelease> {
        plan_release(listing, &self.config.releases_dir(), self.config.product_name())
    }

    /// Builds the next release archive.
    ///
    /// # Errors
    ///
    /// - [`ReleaseError::MissingArtifacts`] if an external artifact is absent;
    ///   nothing is written in that case
    /// - [`ReleaseError::VersionOutOfRange`] if no higher version number exists
    /// - any error of [`resources::bundle`]
    /// - [`ReleaseError::Io`] / [`ReleaseError::Archive`] while writing; the
    ///   final path is left untouched
    pub fn package(&self) -> Result<ReleaseArtifact> {
        let missing = self.missing_artifacts();
        if !missing.is_empty() {
            return Err(ReleaseError::MissingArtifacts { paths: missing });
        }

        fs::ensure_dir(&self.config.releases_dir())?;
        let planned = self.plan()?;
        fs::remove_file(&planned.path)?;

        resources::bundle(&self.config, self.config.working_dir())?;

        log::info!("Writing release {}", planned.path.display());
        let mut archive = ArchiveWriter::create(&planned.path)?;
        for entry in self.config.manifest() {
            archive.add_file(&entry.name, &entry.source_in(self.config.working_dir()))?;
        }
        let entries = archive.finish()?;

        let size = std::fs::metadata(&planned.path)
            .fs_context("reading artifact metadata", &planned.path)?
            .len();
        let checksum = calculate_sha256(&planned.path)?;
        log::info!(
            "Created release {} ({} bytes, sha256 {})",
            planned.path.display(),
            size,
            checksum
        );

        Ok(ReleaseArtifact {
            path: planned.path,
            version: planned.version,
            entries,
            size,
            checksum,
        })
    }
}
