//! Release orchestration and coordination.
//!
//! This module provides the main [`ReleasePackager`] that turns a
//! [`PackagerConfig`](crate::bundler::PackagerConfig) into a versioned
//! release archive.
//!
//! # Overview
//!
//! The packager:
//! 1. Validates the external artifacts named by the manifest
//! 2. Picks the next version number
//! 3. Regenerates the resource bundle
//! 4. Writes the release archive
//! 5. Returns a [`ReleaseArtifact`] with size and checksum
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`ReleasePackager`] struct and packaging operations

mod checksum;
mod orchestrator;

pub use checksum::calculate_sha256;
pub use orchestrator::{ReleaseArtifact, ReleasePackager};
