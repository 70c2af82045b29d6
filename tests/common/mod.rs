//! Shared scratch game layouts for integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch tree shaped like the game checkout:
///
/// ```text
/// <root>/Releases/
/// <root>/ThirdParty/hge/{hge,bass}.dll
/// <root>/ThirdParty/sqlite/sqlite3.dll
/// <root>/Projects/UrbanWarfare/        <- working directory
///     readme.txt, changes.txt, Release/UrbanWarfare.exe
///     Resources/{a.png, b.txt, c.wav, d.PNG, world.db3}
/// ```
pub struct GameTree {
    pub root: TempDir,
}

impl GameTree {
    pub fn new() -> Self {
        let tree = Self {
            root: tempfile::tempdir().unwrap(),
        };

        std::fs::create_dir_all(tree.releases()).unwrap();
        tree.write(&tree.root.path().join("ThirdParty/hge/hge.dll"), b"hge");
        tree.write(&tree.root.path().join("ThirdParty/hge/bass.dll"), b"bass");
        tree.write(&tree.root.path().join("ThirdParty/sqlite/sqlite3.dll"), b"sqlite");

        let game = tree.game();
        tree.write(&game.join("readme.txt"), b"Urban Warfare");
        tree.write(&game.join("changes.txt"), b"- initial release");
        tree.write(&game.join("Release/UrbanWarfare.exe"), b"MZ game");

        let resources = game.join("Resources");
        tree.write(&resources.join("a.png"), b"png data");
        tree.write(&resources.join("b.txt"), b"notes");
        tree.write(&resources.join("c.wav"), b"wav data");
        tree.write(&resources.join("d.PNG"), b"upper png");
        tree.write(&resources.join("world.db3"), b"SQLite format 3");
        tree
    }

    /// Working directory of the packager.
    pub fn game(&self) -> PathBuf {
        self.root.path().join("Projects").join("UrbanWarfare")
    }

    pub fn releases(&self) -> PathBuf {
        self.root.path().join("Releases")
    }

    pub fn write(&self, path: &Path, contents: &[u8]) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }
}

/// Sorted entry names of a zip archive.
pub fn entry_names(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

/// Contents of one archive entry.
pub fn entry_bytes(path: &Path, name: &str) -> Vec<u8> {
    use std::io::Read;

    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).unwrap();
    bytes
}

/// Sorted file names in a directory.
pub fn dir_names(path: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(path)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
