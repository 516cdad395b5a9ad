//! # sdvpack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and builds its fixtures with these functions.
//!
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns an `assert_cmd::Command` for the compiled `sdvpack` binary with the
/// location environment variables cleared, so the host setup never leaks in.
pub fn sdvpack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sdvpack").expect("Failed to find sdvpack binary for testing");
    cmd.env_remove("SDV_GAME_PATH")
        .env_remove("SDV_WORKSPACE")
        .env_remove("RUST_LOG");
    cmd
}

/// A temporary game folder plus a mod workspace named `MyMod` beside it.
pub struct ModFixture {
    pub dir: TempDir,
    pub game: PathBuf,
    pub workspace: PathBuf,
}

impl ModFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let game = dir.path().join("Stardew Valley");
        let workspace = dir.path().join("MyMod");
        fs::create_dir_all(&game).expect("game dir");
        fs::create_dir_all(&workspace).expect("workspace dir");
        Self {
            dir,
            game,
            workspace,
        }
    }

    /// Writes `contents` to `relative` inside the workspace, creating parents.
    pub fn write(&self, relative: &str, contents: &str) -> &Self {
        let path = self.workspace.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent dir");
        }
        fs::write(path, contents).expect("write workspace file");
        self
    }

    /// `sdvpack` with `--workspace` and `--game-path` pointing at the fixture.
    pub fn cmd(&self) -> Command {
        let mut cmd = sdvpack_cmd();
        cmd.arg("--workspace")
            .arg(&self.workspace)
            .arg("--game-path")
            .arg(&self.game)
            .arg("--platform")
            .arg("unix");
        cmd
    }
}

/// Sorted entry names of a zip archive.
pub fn archive_names(path: &Path) -> Vec<String> {
    let file = fs::File::open(path).expect("open archive");
    let archive = zip::ZipArchive::new(file).expect("read archive");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}
