//! # sdvpack Invocation Context
//!
//! File: cli/src/core/context.rs
//!
//! ## Overview
//!
//! Every command receives an explicit `InvocationContext` describing the
//! workspace being packaged, the platform the launcher runs on, and the game
//! installation folder that relative configuration paths are resolved
//! against. Nothing in the pipeline looks these values up on its own.
//!
use crate::core::error::{PackError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Platform family. Only the launcher executable name depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// File name of the SMAPI launcher on this platform.
    pub fn default_launcher_name(self) -> &'static str {
        match self {
            Platform::Windows => "StardewModdingAPI.exe",
            Platform::Unix => "StardewModdingAPI",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Unix => write!(f, "unix"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win32" | "win" => Ok(Platform::Windows),
            "unix" | "linux" | "macos" | "darwin" => Ok(Platform::Unix),
            other => Err(format!(
                "Unknown platform '{}'. Expected 'windows' or 'unix'.",
                other
            )),
        }
    }
}

/// Explicit per-invocation context passed into every pipeline entry point.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Root of the mod workspace. `None` when no workspace is available.
    pub workspace_root: Option<PathBuf>,
    pub platform: Platform,
    /// Game installation folder; relative config paths are joined onto it.
    pub install_root_hint: PathBuf,
}

impl InvocationContext {
    pub fn new(
        workspace_root: Option<PathBuf>,
        platform: Platform,
        install_root_hint: impl Into<PathBuf>,
    ) -> Self {
        Self {
            workspace_root,
            platform,
            install_root_hint: install_root_hint.into(),
        }
    }

    /// Returns the workspace root, failing if it is absent or not a directory.
    pub fn workspace(&self) -> Result<&Path> {
        let root = self.workspace_root.as_deref().ok_or_else(|| {
            PackError::MissingWorkspace("no workspace folder was provided".to_string())
        })?;
        if !root.is_dir() {
            anyhow::bail!(PackError::MissingWorkspace(format!(
                "'{}' is not a directory",
                root.display()
            )));
        }
        Ok(root)
    }

    /// Final path component of the workspace root, used to name the
    /// archive and the deploy folder.
    pub fn workspace_name(&self) -> Result<String> {
        let root = self.workspace()?;
        // `canonicalize` resolves roots like "." to a real folder name.
        let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        resolved
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                PackError::MissingWorkspace(format!(
                    "cannot determine a folder name for '{}'",
                    root.display()
                ))
                .into()
            })
    }
}
