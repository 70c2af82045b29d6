//! Resource bundling and release packaging.
//!
//! - [`resources`] rebuilds `resources.dat` and `world.db3`
//! - [`ReleasePackager`] writes `<product>_<NN>.zip`
//! - [`ArchiveWriter`] is the zip writer both share
//!
//! Everything is driven by an explicit [`PackagerConfig`].

mod archive;
mod builder;
pub mod resources;
pub mod settings;
pub mod utils;
mod version;

pub use archive::ArchiveWriter;
pub use builder::{ReleaseArtifact, ReleasePackager, calculate_sha256};
pub use resources::{RESOURCES_FILE, ResourceBundle, WORLD_FILE, bundle};
pub use settings::{
    CONFIG_FILE_NAME, ConfigFile, EntryKind, ManifestEntry, PackagerConfig, PackagerConfigBuilder,
    default_manifest,
};
pub use version::{
    DirectoryListing, PlannedRelease, ReleaseListing, ReleasePattern, next_version, plan_release,
};
