//! Release version selection.
//!
//! The next version is one past the highest `<product>_<NN>.zip` already in
//! the releases directory. Selection itself is a pure function over file
//! names; [`ReleaseListing`] supplies the names.

use crate::error::{ErrorExt, ReleaseError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Source of release file names.
pub trait ReleaseListing {
    /// Names of the regular files that may be releases.
    fn file_names(&self) -> Result<Vec<String>>;
}

/// Lists regular files directly inside a directory.
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    dir: PathBuf,
}

impl DirectoryListing {
    /// Creates a listing over `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReleaseListing for DirectoryListing {
    fn file_names(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).fs_context("listing", &self.dir)?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.fs_context("reading entry in", &self.dir)?;
            // Follows symlinks, so a link to a release counts as one.
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => log::debug!("Skipping non UTF-8 name {:?}", name),
            }
        }
        Ok(names)
    }
}

impl<S: AsRef<str>> ReleaseListing for [S] {
    fn file_names(&self) -> Result<Vec<String>> {
        Ok(self.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> ReleaseListing for Vec<S> {
    fn file_names(&self) -> Result<Vec<String>> {
        self.as_slice().file_names()
    }
}

/// Matches `<product>_<digits>.zip` against whole file names.
#[derive(Debug, Clone)]
pub struct ReleasePattern {
    product: String,
    regex: Regex,
}

impl ReleasePattern {
    /// Builds the pattern for `product`.
    pub fn new(product: &str) -> Result<Self> {
        let pattern = format!(r"^{}_([0-9]+)\.zip$", regex::escape(product));
        let regex = Regex::new(&pattern)
            .map_err(|e| ReleaseError::config(format!("release pattern {pattern}: {e}")))?;
        Ok(Self {
            product: product.to_string(),
            regex,
        })
    }

    /// Returns the version number encoded in `file_name`, if it is a release.
    ///
    /// A release whose digit run does not fit `u32` is an error, since no
    /// representable version can follow it.
    pub fn version_of(&self, file_name: &str) -> Result<Option<u32>> {
        let Some(digits) = self.regex.captures(file_name).and_then(|c| c.get(1)) else {
            return Ok(None);
        };
        digits
            .as_str()
            .parse()
            .map(Some)
            .map_err(|_| ReleaseError::VersionOutOfRange {
                name: file_name.to_string(),
            })
    }

    /// File name of release `version`, zero-padded to two digits.
    pub fn file_name(&self, version: u32) -> String {
        format!("{}_{:02}.zip", self.product, version)
    }
}

/// Computes the next release version from existing file names.
///
/// Starts at 1 and ends strictly above every matching version.
///
/// # Errors
///
/// [`ReleaseError::VersionOutOfRange`] when a release number does not fit
/// `u32` or is already `u32::MAX`.
pub fn next_version<I, S>(names: I, pattern: &ReleasePattern) -> Result<u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidate = 1u32;
    for name in names {
        let name = name.as_ref();
        let Some(existing) = pattern.version_of(name)? else {
            continue;
        };
        if existing >= candidate {
            candidate = existing
                .checked_add(1)
                .ok_or_else(|| ReleaseError::VersionOutOfRange {
                    name: name.to_string(),
                })?;
        }
    }
    Ok(candidate)
}

/// The release about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRelease {
    /// Chosen version number.
    pub version: u32,
    /// Destination of the archive.
    pub path: PathBuf,
}

/// Chooses the version and destination path for the next release.
pub fn plan_release<L>(listing: &L, releases_dir: &Path, product: &str) -> Result<PlannedRelease>
where
    L: ReleaseListing + ?Sized,
{
    let pattern = ReleasePattern::new(product)?;
    let version = next_version(listing.file_names()?, &pattern)?;
    let path = releases_dir.join(pattern.file_name(version));
    log::info!("Next release of {} is version {}", product, version);
    Ok(PlannedRelease { version, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(names: &[&str]) -> u32 {
        try_next(names).unwrap()
    }

    fn try_next(names: &[&str]) -> Result<u32> {
        next_version(names, &ReleasePattern::new("product").unwrap())
    }

    #[test]
    fn one_past_highest_existing() {
        assert_eq!(next(&["product_01.zip", "product_03.zip", "product_07.zip"]), 8);
    }

    #[test]
    fn empty_directory_starts_at_one() {
        assert_eq!(next(&[]), 1);
    }

    #[test]
    fn non_matching_names_are_ignored() {
        assert_eq!(
            next(&[
                "product_abc.zip",
                "otherproduct_05.zip",
                "product_05.zip.bak",
                "product_09.tar",
                "my_product_04.zip",
                "product_.zip",
                "readme.txt",
            ]),
            1
        );
    }

    #[test]
    fn versions_need_not_be_padded_or_contiguous() {
        assert_eq!(next(&["product_2.zip", "product_100.zip", "product_007.zip"]), 101);
    }

    #[test]
    fn zero_still_yields_one() {
        assert_eq!(next(&["product_00.zip"]), 1);
    }

    #[test]
    fn overflowing_version_is_an_error() {
        let err = try_next(&["product_04.zip", "product_99999999999.zip"]).unwrap_err();
        match err {
            ReleaseError::VersionOutOfRange { name } => assert_eq!(name, "product_99999999999.zip"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn highest_representable_version_has_no_successor() {
        assert_eq!(next(&["product_4294967294.zip"]), u32::MAX);
        let err = try_next(&["product_4294967295.zip", "product_02.zip"]).unwrap_err();
        assert!(matches!(err, ReleaseError::VersionOutOfRange { .. }));
    }

    #[test]
    fn product_name_is_matched_literally() {
        let pattern = ReleasePattern::new("urban.warfare").unwrap();
        assert_eq!(pattern.version_of("urban.warfare_03.zip").unwrap(), Some(3));
        assert_eq!(pattern.version_of("urbanXwarfare_03.zip").unwrap(), None);
    }

    #[test]
    fn file_names_are_zero_padded() {
        let pattern = ReleasePattern::new("urban_warfare").unwrap();
        assert_eq!(pattern.file_name(8), "urban_warfare_08.zip");
        assert_eq!(pattern.file_name(123), "urban_warfare_123.zip");
    }

    #[test]
    fn plan_uses_listing() {
        let listing = vec!["urban_warfare_11.zip"];
        let plan = plan_release(&listing, Path::new("rel"), "urban_warfare").unwrap();
        assert_eq!(plan.version, 12);
        assert_eq!(plan.path, Path::new("rel").join("urban_warfare_12.zip"));
    }

    #[test]
    fn directory_listing_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("urban_warfare_02.zip"), b"").unwrap();
        std::fs::create_dir(dir.path().join("urban_warfare_09.zip")).unwrap();

        let listing = DirectoryListing::new(dir.path());
        let plan = plan_release(&listing, dir.path(), "urban_warfare").unwrap();
        assert_eq!(plan.version, 3);
    }
}
