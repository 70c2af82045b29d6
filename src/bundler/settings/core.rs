//! Core PackagerConfig struct and implementations.

use super::ManifestEntry;
use std::path::{Path, PathBuf};

/// Configuration shared by the resource bundler and the release packager.
///
/// Constructed via [`PackagerConfigBuilder`](super::PackagerConfigBuilder).
/// Relative directories resolve against [`working_dir`](Self::working_dir),
/// so nothing depends on the process working directory once built.
///
/// # Examples
///
/// ```no_run
/// use urban_warfare_release::bundler::PackagerConfigBuilder;
///
/// # fn example() -> urban_warfare_release::Result<()> {
/// let config = PackagerConfigBuilder::new()
///     .working_dir("game")
///     .releases_dir("../Releases")
///     .build()?;
/// assert_eq!(config.product_name(), "urban_warfare");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PackagerConfig {
    /// Directory the packager runs against.
    working_dir: PathBuf,

    /// Source directory of game assets.
    resources_dir: PathBuf,

    /// Destination directory of versioned release archives.
    releases_dir: PathBuf,

    /// Product name used in release file names.
    product_name: String,

    /// Resource file extensions, without the leading dot.
    extensions: Vec<String>,

    /// Files shipped in every release.
    manifest: Vec<ManifestEntry>,
}

impl PackagerConfig {
    /// Returns the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Returns the resource source directory, resolved against the working directory.
    pub fn resources_dir(&self) -> PathBuf {
        self.working_dir.join(&self.resources_dir)
    }

    /// Returns the releases directory, resolved against the working directory.
    pub fn releases_dir(&self) -> PathBuf {
        self.working_dir.join(&self.releases_dir)
    }

    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the resource extension allow-list.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns the release manifest.
    pub fn manifest(&self) -> &[ManifestEntry] {
        &self.manifest
    }

    /// Returns true when `file_name` ends with `.<ext>` for an allowed extension.
    ///
    /// Matching is case-sensitive.
    pub fn is_resource(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    /// Creates a new PackagerConfig instance (used by PackagerConfigBuilder).
    pub(super) fn new(
        working_dir: PathBuf,
        resources_dir: PathBuf,
        releases_dir: PathBuf,
        product_name: String,
        extensions: Vec<String>,
        manifest: Vec<ManifestEntry>,
    ) -> Self {
        Self {
            working_dir,
            resources_dir,
            releases_dir,
            product_name,
            extensions,
            manifest,
        }
    }
}
