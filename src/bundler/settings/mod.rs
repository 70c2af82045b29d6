//! Configuration structures for bundling and packaging.
//!
//! This module provides the explicit configuration passed into both the
//! resource bundler and the release packager, the declarative release
//! manifest, and the optional `release.toml` file.

mod builder;
mod core;
mod file;
mod manifest;

pub use builder::{DEFAULT_EXTENSIONS, DEFAULT_PRODUCT_NAME, DEFAULT_RESOURCES_DIR, PackagerConfigBuilder};
pub use core::PackagerConfig;
pub use file::{CONFIG_FILE_NAME, ConfigFile};
pub use manifest::{EntryKind, ManifestEntry, default_manifest};
