//! # sdvpack Deploy Integration Tests
//!
//! File: cli/tests/deploy.rs
//!
//! ## Overview
//!
//! End-to-end runs of `sdvpack deploy`, `sdvpack launch --dry-run` and
//! `sdvpack config` against temporary game folders.
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_deploy_mirrors_filtered_workspace() {
    let fixture = ModFixture::new();
    fixture
        .write("manifest.json", "{\"Name\":\"MyMod\"}")
        .write("assets/icon.png", "png")
        .write("src/Mod.cs", "class Mod {}")
        .write("IgnoreFiles.sdvextension", "[\"src/\", \"*.sdvextension\"]");

    fixture
        .cmd()
        .arg("deploy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deployed 3 items to"));

    let target = fixture.game.join("Mods/MyMod");
    assert!(target.join("manifest.json").is_file());
    assert_eq!(fs::read_to_string(target.join("assets/icon.png")).unwrap(), "png");
    assert!(!target.join("src").exists());
    assert!(!target.join("IgnoreFiles.sdvextension").exists());
}

#[test]
fn test_deploy_overwrites_and_keeps_foreign_files() {
    let fixture = ModFixture::new();
    fixture.write("manifest.json", "new");
    let target = fixture.game.join("Mods/MyMod");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("manifest.json"), "old").unwrap();
    fs::write(target.join("config.json"), "player settings").unwrap();

    fixture.cmd().arg("deploy").assert().success();

    assert_eq!(fs::read_to_string(target.join("manifest.json")).unwrap(), "new");
    assert_eq!(
        fs::read_to_string(target.join("config.json")).unwrap(),
        "player settings"
    );
}

#[test]
fn test_deploy_into_configured_mod_folder() {
    let fixture = ModFixture::new();
    fixture
        .write("manifest.json", "{}")
        .write("ConfigOverride.sdvextension", r#"{"ModFolderPath": "/Mods/Testing"}"#);

    fixture.cmd().arg("deploy").assert().success();

    assert!(fixture.game.join("Mods/Testing/MyMod/manifest.json").is_file());
}

#[test]
fn test_deploy_with_failed_launch_keeps_files() {
    let fixture = ModFixture::new();
    fixture.write("manifest.json", "{}");

    fixture
        .cmd()
        .args(["deploy", "--launch"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Deployed 1 items to"))
        .stderr(predicate::str::contains("Failed to launch SMAPI"));

    assert!(fixture.game.join("Mods/MyMod/manifest.json").is_file());
}

#[test]
fn test_launch_dry_run_default_launcher() {
    let fixture = ModFixture::new();
    fixture.write("ConfigOverride.sdvextension", r#"{"ModFolderPath": "Mods/Dev"}"#);

    fixture
        .cmd()
        .args(["launch", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("StardewModdingAPI\" --mods-path \"Mods/Dev\""));
}

#[test]
fn test_launch_dry_run_custom_launcher() {
    let fixture = ModFixture::new();
    fixture.write("ConfigOverride.sdvextension", r#"{"SMAPIPath": "tools/run.sh"}"#);

    fixture
        .cmd()
        .args(["launch", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tools/run.sh\"\n"))
        .stdout(predicate::str::contains("--mods-path").not());
}

#[test]
fn test_config_text_output() {
    let fixture = ModFixture::new();
    fixture.write("ConfigOverride.sdvextension", r#"{"ModVersion": "2.0.1"}"#);

    fixture
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mod version:    2.0.1"))
        .stdout(predicate::str::contains("ZippedMods"));
}
