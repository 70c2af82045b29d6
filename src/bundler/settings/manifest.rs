//! Release manifest: the declarative table of files shipped in a release.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// What role a manifest entry plays in the release.
///
/// Generated entries are rebuilt by the resource bundler during packaging,
/// so they are not required to exist before the run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Plain text shipped alongside the game (readme, changelog).
    Document,
    /// Produced by the resource bundler on every run.
    Generated,
    /// The compiled game executable.
    Executable,
    /// Third-party runtime library.
    Library,
}

impl EntryKind {
    /// Returns true when the entry must exist before packaging starts.
    pub fn is_external(self) -> bool {
        !matches!(self, EntryKind::Generated)
    }
}

/// One file in the release archive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    /// Name inside the archive.
    pub name: String,

    /// Source path, relative to the working directory unless absolute.
    pub source: PathBuf,

    /// Role of the entry.
    #[serde(default = "default_kind")]
    pub kind: EntryKind,
}

fn default_kind() -> EntryKind {
    EntryKind::Document
}

impl ManifestEntry {
    /// Creates a manifest entry.
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            kind,
        }
    }

    /// Resolves the source path against the working directory.
    pub fn source_in(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.source)
    }
}

/// The release contents of Urban Warfare.
pub fn default_manifest() -> Vec<ManifestEntry> {
    let third_party = Path::new("..").join("..").join("ThirdParty");
    vec![
        ManifestEntry::new("readme.txt", "readme.txt", EntryKind::Document),
        ManifestEntry::new("changes.txt", "changes.txt", EntryKind::Document),
        ManifestEntry::new("world.db3", "world.db3", EntryKind::Generated),
        ManifestEntry::new("resources.dat", "resources.dat", EntryKind::Generated),
        ManifestEntry::new(
            "UrbanWarfare.exe",
            Path::new("Release").join("UrbanWarfare.exe"),
            EntryKind::Executable,
        ),
        ManifestEntry::new("hge.dll", third_party.join("hge").join("hge.dll"), EntryKind::Library),
        ManifestEntry::new("bass.dll", third_party.join("hge").join("bass.dll"), EntryKind::Library),
        ManifestEntry::new(
            "sqlite3.dll",
            third_party.join("sqlite").join("sqlite3.dll"),
            EntryKind::Library,
        ),
    ]
}

/// Checks entry names are unique and flat.
pub(crate) fn validate_manifest(manifest: &[ManifestEntry]) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for entry in manifest {
        if entry.name.is_empty() {
            return Err("manifest entry with empty name".to_string());
        }
        if entry.name.contains('/') || entry.name.contains('\\') {
            return Err(format!(
                "manifest entry '{}' must be a bare file name",
                entry.name
            ));
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(format!("duplicate manifest entry '{}'", entry.name));
        }
    }
    Ok(())
}
