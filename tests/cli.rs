//! End-to-end runs of the `build_release` and `build_resources` binaries.

mod common;

use assert_cmd::Command;
use common::{GameTree, dir_names, entry_names};
use predicates::prelude::*;

#[test]
fn build_release_prints_archive_path() {
    let tree = GameTree::new();
    tree.write(&tree.releases().join("urban_warfare_02.zip"), b"old");

    Command::cargo_bin("build_release")
        .unwrap()
        .current_dir(tree.game())
        .env_remove("URBAN_RELEASE_CONFIG")
        .assert()
        .success()
        .stdout(predicate::str::contains("urban_warfare_03.zip"));

    assert_eq!(
        entry_names(&tree.releases().join("urban_warfare_03.zip")).len(),
        8
    );
}

#[test]
fn build_release_dry_run_writes_nothing() {
    let tree = GameTree::new();

    Command::cargo_bin("build_release")
        .unwrap()
        .current_dir(tree.game())
        .env_remove("URBAN_RELEASE_CONFIG")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("urban_warfare_01.zip"));

    assert!(dir_names(&tree.releases()).is_empty());
    assert!(!tree.game().join("resources.dat").exists());
}

#[test]
fn build_release_dry_run_does_not_create_releases_dir() {
    let tree = GameTree::new();
    std::fs::remove_dir(tree.releases()).unwrap();

    Command::cargo_bin("build_release")
        .unwrap()
        .current_dir(tree.game())
        .env_remove("URBAN_RELEASE_CONFIG")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("urban_warfare_01.zip"));

    assert!(!tree.releases().exists());
}

#[test]
fn build_release_fails_without_executable() {
    let tree = GameTree::new();
    std::fs::remove_file(tree.game().join("Release/UrbanWarfare.exe")).unwrap();

    Command::cargo_bin("build_release")
        .unwrap()
        .current_dir(tree.game())
        .env_remove("URBAN_RELEASE_CONFIG")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("UrbanWarfare.exe")));

    assert!(dir_names(&tree.releases()).is_empty());
}

#[test]
fn build_release_reads_release_toml() {
    let tree = GameTree::new();
    tree.write(
        &tree.game().join("release.toml"),
        b"product_name = \"uw_beta\"\nreleases_dir = \"dist\"\n",
    );
    std::fs::create_dir(tree.game().join("dist")).unwrap();

    Command::cargo_bin("build_release")
        .unwrap()
        .current_dir(tree.game())
        .env_remove("URBAN_RELEASE_CONFIG")
        .assert()
        .success();

    assert_eq!(dir_names(&tree.game().join("dist")), ["uw_beta_01.zip"]);
}

#[test]
fn build_resources_defaults_to_current_dir() {
    let tree = GameTree::new();

    Command::cargo_bin("build_resources")
        .unwrap()
        .current_dir(tree.game())
        .env_remove("URBAN_RELEASE_CONFIG")
        .assert()
        .success();

    assert_eq!(entry_names(&tree.game().join("resources.dat")), ["a.png", "c.wav"]);
    assert!(tree.game().join("world.db3").is_file());
}

#[test]
fn build_resources_writes_into_target() {
    let tree = GameTree::new();
    std::fs::create_dir(tree.game().join("out")).unwrap();

    Command::cargo_bin("build_resources")
        .unwrap()
        .current_dir(tree.game())
        .env_remove("URBAN_RELEASE_CONFIG")
        .arg("out")
        .assert()
        .success()
        .stdout(predicate::str::contains("resources.dat"));

    assert_eq!(
        dir_names(&tree.game().join("out")),
        ["resources.dat", "world.db3"]
    );
}

#[test]
fn build_resources_fails_without_resource_dir() {
    let tree = GameTree::new();
    std::fs::remove_dir_all(tree.game().join("Resources")).unwrap();

    Command::cargo_bin("build_resources")
        .unwrap()
        .current_dir(tree.game())
        .env_remove("URBAN_RELEASE_CONFIG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resources"));
}
