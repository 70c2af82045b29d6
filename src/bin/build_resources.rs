//! Urban Warfare resource bundler.
//!
//! Rebuilds resources.dat and world.db3 in the target directory.

use clap::Parser;
use std::process;
use urban_warfare_release::cli;

fn main() {
    env_logger::init();

    let exit_code = match cli::run_resources(cli::ResourcesArgs::parse()) {
        Ok(code) => code,
        Err(e) => {
            cli::report(&e);
            1
        }
    };

    process::exit(exit_code);
}
