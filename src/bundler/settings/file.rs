//! Optional `release.toml` configuration file.

use super::ManifestEntry;
use crate::error::{ErrorExt, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "release.toml";

/// Contents of a `release.toml` file.
///
/// Every key is optional; absent keys keep the builder defaults. A
/// `[[manifest]]` array replaces the whole default manifest.
///
/// ```toml
/// product_name = "urban_warfare"
/// resources_dir = "Resources"
/// releases_dir = "../../Releases"
/// extensions = ["png", "wav"]
///
/// [[manifest]]
/// name = "hge.dll"
/// source = "../../ThirdParty/hge/hge.dll"
/// kind = "library"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Product name used in release file names.
    #[serde(default)]
    pub product_name: Option<String>,

    /// Asset source directory.
    #[serde(default)]
    pub resources_dir: Option<PathBuf>,

    /// Releases directory.
    #[serde(default)]
    pub releases_dir: Option<PathBuf>,

    /// Resource extension allow-list.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Release manifest.
    #[serde(default)]
    pub manifest: Option<Vec<ManifestEntry>>,
}

impl ConfigFile {
    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).fs_context("reading config", path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Loads `release.toml` from `dir` when present.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            log::debug!("No {} in {}", CONFIG_FILE_NAME, dir.display());
            return Ok(None);
        }
        log::info!("Using configuration {}", path.display());
        Self::load(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::settings::EntryKind;

    #[test]
    fn parses_manifest_table() {
        let file: ConfigFile = toml::from_str(
            r#"
            releases_dir = "out"

            [[manifest]]
            name = "game.exe"
            source = "build/game.exe"
            kind = "executable"

            [[manifest]]
            name = "readme.txt"
            source = "readme.txt"
            "#,
        )
        .unwrap();

        assert_eq!(file.releases_dir, Some(PathBuf::from("out")));
        let manifest = file.manifest.unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest[0].kind, EntryKind::Executable);
        assert_eq!(manifest[1].kind, EntryKind::Document);
    }

    #[test]
    fn rejects_unknown_keys() {
        let parsed: std::result::Result<ConfigFile, _> = toml::from_str("produt_name = \"x\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn discover_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigFile::discover(dir.path()).unwrap().is_none());
    }
}
