//! Command line argument parsing and validation.
//!
//! Both binaries run without arguments against the current directory; the
//! flags only override configuration.

use clap::Parser;
use std::path::PathBuf;

/// Versioned release packager
#[derive(Parser, Debug)]
#[command(
    name = "build_release",
    version,
    about = "Packages the next versioned Urban Warfare release",
    long_about = "Packages the next versioned Urban Warfare release.

Scans the releases directory (default ../../Releases) for urban_warfare_<NN>.zip,
rebuilds resources.dat and world.db3 in the current directory, then writes
urban_warfare_<NN+1>.zip containing the game, its libraries and resources.

Settings are read from ./release.toml when present.

Exit code 0 = archive guaranteed to exist at the printed path."
)]
pub struct ReleaseArgs {
    /// Configuration file (default: ./release.toml when present)
    #[arg(short, long, value_name = "PATH", env = "URBAN_RELEASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the path of the next release without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Resource bundler
#[derive(Parser, Debug)]
#[command(
    name = "build_resources",
    version,
    about = "Bundles game resources into resources.dat and copies world.db3"
)]
pub struct ResourcesArgs {
    /// Directory receiving resources.dat and world.db3
    #[arg(value_name = "TARGET", default_value = ".")]
    pub target: PathBuf,

    /// Configuration file (default: ./release.toml when present)
    #[arg(short, long, value_name = "PATH", env = "URBAN_RELEASE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ResourcesArgs {
    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.target.as_os_str().is_empty() {
            return Err("Target directory cannot be empty".to_string());
        }
        if self.target.exists() && !self.target.is_dir() {
            return Err(format!(
                "Target {} is not a directory",
                self.target.display()
            ));
        }
        Ok(())
    }
}
