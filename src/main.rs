//! Urban Warfare release packager.
//!
//! Writes the next versioned release archive into the releases directory
//! and prints its path.

use clap::Parser;
use std::process;
use urban_warfare_release::cli;

fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match cli::run_release(cli::ReleaseArgs::parse()) {
        Ok(code) => code,
        Err(e) => {
            cli::report(&e);
            1
        }
    };

    process::exit(exit_code);
}
