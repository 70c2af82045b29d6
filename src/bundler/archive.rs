//! Zip archive writer with atomic placement.
//!
//! Entries are written into a staging file next to the destination. The
//! staging file is renamed onto the destination only in [`ArchiveWriter::finish`],
//! so an error part-way leaves nothing at the final path.

use crate::error::{ErrorExt, ReleaseError, Result};
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

/// Writes a flat zip archive to `destination`.
pub struct ArchiveWriter {
    destination: PathBuf,
    zip: ZipWriter<NamedTempFile>,
    entries: Vec<String>,
}

impl std::fmt::Debug for ArchiveWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveWriter")
            .field("destination", &self.destination)
            .field("entries", &self.entries)
            .finish()
    }
}

impl ArchiveWriter {
    /// Starts a new archive that will be placed at `destination`.
    ///
    /// The parent directory must exist.
    pub fn create(destination: &Path) -> Result<Self> {
        let dir = match destination.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let staging = tempfile::Builder::new()
            .prefix(".staging-")
            .suffix(".zip")
            .tempfile_in(dir)
            .fs_context("creating staging file in", dir)?;
        log::debug!(
            "Staging {} at {}",
            destination.display(),
            staging.path().display()
        );

        Ok(Self {
            destination: destination.to_path_buf(),
            zip: ZipWriter::new(staging),
            entries: Vec::new(),
        })
    }

    /// Entry options shared by every file.
    ///
    /// The fixed timestamp keeps archives byte-identical across runs.
    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
    }

    /// Adds the file at `source` under `name`.
    pub fn add_file(&mut self, name: &str, source: &Path) -> Result<()> {
        let file = match File::open(source) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ReleaseError::MissingSource {
                    path: source.to_path_buf(),
                });
            }
            Err(e) => return Err(e).fs_context("opening", source),
        };

        self.zip.start_file(name, Self::options())?;
        io::copy(&mut BufReader::new(file), &mut self.zip).fs_context("reading", source)?;
        log::debug!("Added {} from {}", name, source.display());
        self.entries.push(name.to_string());
        Ok(())
    }

    /// Finalizes the archive and moves it onto the destination path.
    ///
    /// Returns the in-archive entry names.
    pub fn finish(self) -> Result<Vec<String>> {
        let mut staging = self.zip.finish()?;
        staging.flush().fs_context("flushing", staging.path())?;
        staging.as_file().sync_all().fs_context("syncing", staging.path())?;
        staging.persist(&self.destination)?;
        log::debug!(
            "Wrote {} ({} entries)",
            self.destination.display(),
            self.entries.len()
        );
        Ok(self.entries)
    }
}
