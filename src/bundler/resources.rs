//! Resource bundler.
//!
//! Rebuilds `resources.dat` from the asset directory and refreshes the
//! world database next to it.

use crate::{
    bundler::{ArchiveWriter, PackagerConfig, utils::fs},
    error::{ReleaseError, Result},
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the resource archive.
pub const RESOURCES_FILE: &str = "resources.dat";

/// Name of the world database.
pub const WORLD_FILE: &str = "world.db3";

/// Files written by one bundler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    /// Path of `resources.dat`.
    pub resources_file: PathBuf,
    /// Path of `world.db3`.
    pub world_file: PathBuf,
    /// Entry names inside `resources.dat`, sorted.
    pub entries: Vec<String>,
}

/// Collects resource files directly inside `resources_dir`, sorted by name.
///
/// Returns `(file name, path)` pairs for regular files whose name carries an
/// allowed extension. Anything else is skipped.
pub fn collect_resources(config: &PackagerConfig, resources_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !resources_dir.is_dir() {
        return Err(ReleaseError::MissingSource {
            path: resources_dir.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(resources_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str() else {
            log::debug!("Skipping non UTF-8 name {:?}", entry.file_name());
            continue;
        };
        if !config.is_resource(name) {
            log::debug!("Skipping {}", name);
            continue;
        }
        if !entry.path().is_file() {
            log::debug!("Skipping non-file {}", name);
            continue;
        }
        found.push((name.to_string(), entry.path().to_path_buf()));
    }
    Ok(found)
}

/// Bundles resources into `target_dir`.
///
/// Deletes and rewrites `target_dir/resources.dat` with every matching file
/// of the configured resource directory (flat, bare file names), then
/// replaces `target_dir/world.db3` with a copy of the source database.
///
/// # Errors
///
/// - [`ReleaseError::MissingSource`] if the resource directory or the
///   source database is absent
/// - [`ReleaseError::Io`] if the target directory is not writable
pub fn bundle(config: &PackagerConfig, target_dir: &Path) -> Result<ResourceBundle> {
    let resources_dir = config.resources_dir();
    log::info!(
        "Bundling resources from {} into {}",
        resources_dir.display(),
        target_dir.display()
    );

    let resources_file = target_dir.join(RESOURCES_FILE);
    fs::remove_file(&resources_file)?;

    let mut archive = ArchiveWriter::create(&resources_file)?;
    for (name, path) in collect_resources(config, &resources_dir)? {
        archive.add_file(&name, &path)?;
    }
    let entries = archive.finish()?;
    log::info!(
        "Wrote {} with {} resources",
        resources_file.display(),
        entries.len()
    );

    let world_file = target_dir.join(WORLD_FILE);
    fs::remove_file(&world_file)?;
    let bytes = fs::copy_file(&resources_dir.join(WORLD_FILE), &world_file)?;
    log::info!("Copied {} ({} bytes)", world_file.display(), bytes);

    Ok(ResourceBundle {
        resources_file,
        world_file,
        entries,
    })
}
