//! Command line interface for the release tooling.
//!
//! This module parses arguments, assembles the [`PackagerConfig`] and runs
//! the bundler or packager, printing the produced paths.

mod args;

pub use args::{ReleaseArgs, ResourcesArgs};

use crate::bundler::{self, ConfigFile, PackagerConfig, PackagerConfigBuilder, ReleasePackager};
use crate::error::Result;
use anyhow::Context;
use std::path::Path;

/// Builds the configuration for a run in `working_dir`.
///
/// An explicit config file must exist; otherwise `release.toml` in the
/// working directory is used when present.
pub fn load_config(working_dir: &Path, config: Option<&Path>) -> Result<PackagerConfig> {
    let file = match config {
        Some(path) => Some(ConfigFile::load(path)?),
        None => ConfigFile::discover(working_dir)?,
    };

    let mut builder = PackagerConfigBuilder::new().working_dir(working_dir);
    if let Some(file) = file {
        builder = builder.config_file(file);
    }
    builder.build()
}

/// Entry point of `build_release`.
pub fn run_release(args: ReleaseArgs) -> anyhow::Result<i32> {
    let config = load_config(Path::new("."), args.config.as_deref())
        .context("failed to load configuration")?;
    let packager = ReleasePackager::new(config);

    if args.dry_run {
        let planned = packager.plan().context("failed to pick release version")?;
        println!("{}", planned.path.display());
        return Ok(0);
    }

    let artifact = packager.package().context("failed to package release")?;
    println!("{}", artifact.path.display());
    Ok(0)
}

/// Entry point of `build_resources`.
pub fn run_resources(args: ResourcesArgs) -> anyhow::Result<i32> {
    args.validate().map_err(anyhow::Error::msg)?;

    let config = load_config(Path::new("."), args.config.as_deref())
        .context("failed to load configuration")?;
    let bundle = bundler::bundle(&config, &args.target).context("failed to bundle resources")?;
    println!("{}", bundle.resources_file.display());
    println!("{}", bundle.world_file.display());
    Ok(0)
}

/// Prints an error chain the way both binaries report failures.
pub fn report(error: &anyhow::Error) {
    eprintln!("Error: {:#}", error);
}
