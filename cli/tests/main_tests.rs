//! # sdvpack CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `sdvpack` binary: standard flags and failures
//! that happen before any command runs.
//!
mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    sdvpack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pack"))
        .stdout(predicate::str::contains("deploy"));
}

#[test]
fn test_version_flag() {
    sdvpack_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_game_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    sdvpack_cmd()
        .arg("--workspace")
        .arg(dir.path())
        .arg("pack")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--game-path"));
}

#[test]
fn test_workspace_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    sdvpack_cmd()
        .arg("--workspace")
        .arg(dir.path().join("nope"))
        .arg("--game-path")
        .arg(dir.path())
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workspace folder available"));
}

#[test]
fn test_game_path_from_environment() {
    let fixture = ModFixture::new();
    fixture.write("manifest.json", "{}");
    sdvpack_cmd()
        .env("SDV_GAME_PATH", &fixture.game)
        .env("SDV_WORKSPACE", &fixture.workspace)
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"raw_install_subpath\": \"Mods\""));
}
