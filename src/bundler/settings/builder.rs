//! Builder for constructing PackagerConfig.

use super::{ConfigFile, ManifestEntry, PackagerConfig, default_manifest, manifest::validate_manifest};
use crate::error::{ReleaseError, Result};
use std::path::{Path, PathBuf};

/// Product name used in release archive names.
pub const DEFAULT_PRODUCT_NAME: &str = "urban_warfare";

/// Asset source directory, relative to the working directory.
pub const DEFAULT_RESOURCES_DIR: &str = "Resources";

/// File extensions bundled into `resources.dat`.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "mod", "res", "fnt", "psi", "wav", "mp3"];

fn default_releases_dir() -> PathBuf {
    Path::new("..").join("..").join("Releases")
}

/// Builder for constructing [`PackagerConfig`].
///
/// Every field has a default matching the Urban Warfare layout; set only
/// what differs.
///
/// # Examples
///
/// ```no_run
/// use urban_warfare_release::bundler::PackagerConfigBuilder;
///
/// # fn example() -> urban_warfare_release::Result<()> {
/// let config = PackagerConfigBuilder::new()
///     .working_dir("game")
///     .product_name("urban_warfare_demo")
///     .extensions(["png", "wav"])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct PackagerConfigBuilder {
    working_dir: Option<PathBuf>,
    resources_dir: Option<PathBuf>,
    releases_dir: Option<PathBuf>,
    product_name: Option<String>,
    extensions: Option<Vec<String>>,
    manifest: Option<Vec<ManifestEntry>>,
}

impl PackagerConfigBuilder {
    /// Creates a new config builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the working directory.
    ///
    /// Default: `.`
    pub fn working_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.working_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the resource source directory.
    ///
    /// Default: `Resources`
    pub fn resources_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.resources_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the releases directory.
    ///
    /// Default: `../../Releases`
    pub fn releases_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.releases_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the product name.
    ///
    /// Default: `urban_warfare`
    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Sets the resource extension allow-list.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the release manifest.
    pub fn manifest(mut self, manifest: Vec<ManifestEntry>) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Applies every key present in a configuration file.
    ///
    /// Keys already set on the builder are overwritten.
    pub fn config_file(mut self, file: ConfigFile) -> Self {
        if let Some(name) = file.product_name {
            self.product_name = Some(name);
        }
        if let Some(dir) = file.resources_dir {
            self.resources_dir = Some(dir);
        }
        if let Some(dir) = file.releases_dir {
            self.releases_dir = Some(dir);
        }
        if let Some(extensions) = file.extensions {
            self.extensions = Some(extensions);
        }
        if let Some(manifest) = file.manifest {
            self.manifest = Some(manifest);
        }
        self
    }

    /// Builds the config.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::Config`] for an empty product name, an empty
    /// or dotted extension, or a manifest with duplicate or nested names.
    pub fn build(self) -> Result<PackagerConfig> {
        let product_name = self
            .product_name
            .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string());
        if product_name.is_empty() {
            return Err(ReleaseError::config("product_name cannot be empty"));
        }

        let extensions = self
            .extensions
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect());
        if let Some(bad) = extensions.iter().find(|e| e.is_empty() || e.starts_with('.')) {
            return Err(ReleaseError::config(format!(
                "invalid resource extension '{bad}' (use e.g. \"png\")"
            )));
        }

        let manifest = self.manifest.unwrap_or_else(default_manifest);
        validate_manifest(&manifest).map_err(ReleaseError::config)?;

        Ok(PackagerConfig::new(
            self.working_dir.unwrap_or_else(|| PathBuf::from(".")),
            self.resources_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES_DIR)),
            self.releases_dir.unwrap_or_else(default_releases_dir),
            product_name,
            extensions,
            manifest,
        ))
    }
}
