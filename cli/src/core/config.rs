//! # sdvpack Configuration Resolver
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module turns the optional override document
//! (`ConfigOverride.sdvextension`) into a `ResolvedConfig`: absolute paths for
//! the archive output folder, the mod install folder and the SMAPI launcher,
//! plus the mod version used in archive names.
//!
//! ## Architecture
//!
//! Resolution happens in three steps:
//! 1. The document text is sanitized and parsed into a generic string-keyed map
//!    (`core::document`). A malformed document is reported as a recoverable
//!    `PackError::MalformedDocument` and an empty map is used instead.
//! 2. The recognized keys are lifted into `ConfigOverrides`, a flat struct of
//!    optional fields that remembers which keys were present.
//! 3. Defaults are filled in and path values are joined onto the game folder
//!    from the `InvocationContext`.
//!
//! Recognized keys and defaults:
//!
//! | Key             | Default                                                   |
//! |-----------------|-----------------------------------------------------------|
//! | `ZipPath`       | `ZippedMods`                                              |
//! | `ModFolderPath` | `Mods`                                                    |
//! | `SMAPIPath`     | `StardewModdingAPI.exe` (Windows) / `StardewModdingAPI`   |
//! | `ModVersion`    | empty                                                     |
//!
//! ## Examples
//!
//! ```rust
//! let ctx = InvocationContext::new(Some(root), Platform::current(), game_dir);
//! let resolution = config::resolve(&ctx, Some(r#"{ "ModVersion": "1.2.0", }"#))?;
//! if let Some(problem) = &resolution.problem {
//!     warn!("{}", problem); // recoverable, defaults were used
//! }
//! println!("{}", resolution.config.archive_output_dir.display());
//! ```
//!
use crate::core::context::{InvocationContext, Platform};
use crate::core::document::{self, CONFIG_DOCUMENT};
use crate::core::error::{PackError, Result};
use anyhow::Context;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const ZIP_PATH_KEY: &str = "ZipPath";
const MOD_FOLDER_PATH_KEY: &str = "ModFolderPath";
const SMAPI_PATH_KEY: &str = "SMAPIPath";
const MOD_VERSION_KEY: &str = "ModVersion";

const DEFAULT_ZIP_PATH: &str = "ZippedMods";
const DEFAULT_MOD_FOLDER_PATH: &str = "Mods";

/// Values read from the override document. `None` means the key was absent
/// (or held a non-string value).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub zip_path: Option<String>,
    pub mod_folder_path: Option<String>,
    pub smapi_path: Option<String>,
    pub mod_version: Option<String>,
}

impl ConfigOverrides {
    /// Lifts the recognized keys out of a parsed document.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        for key in map.keys() {
            if ![
                ZIP_PATH_KEY,
                MOD_FOLDER_PATH_KEY,
                SMAPI_PATH_KEY,
                MOD_VERSION_KEY,
            ]
            .contains(&key.as_str())
            {
                debug!("Ignoring unrecognized key '{}' in {}", key, CONFIG_DOCUMENT);
            }
        }
        Self {
            zip_path: string_value(map, ZIP_PATH_KEY),
            mod_folder_path: string_value(map, MOD_FOLDER_PATH_KEY),
            smapi_path: string_value(map, SMAPI_PATH_KEY),
            mod_version: string_value(map, MOD_VERSION_KEY),
        }
    }
}

fn string_value(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        other => {
            warn!(
                "{} in {} should be a string, found {}. Using the default.",
                key, CONFIG_DOCUMENT, other
            );
            None
        }
    }
}

/// Fully defaulted configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Folder the archive is written to.
    pub archive_output_dir: PathBuf,
    /// Folder mods are deployed into (one subfolder per workspace).
    pub install_root_dir: PathBuf,
    /// Absolute path of the SMAPI launcher.
    pub launcher_path: PathBuf,
    /// Launcher path came from the document and names something other than
    /// the platform's default executable.
    pub launcher_overridden: bool,
    pub mod_version: String,
    /// Configured mod folder with leading separators stripped. Only used to
    /// build the `--mods-path` launch argument.
    pub raw_install_subpath: String,
}

/// Result of resolving the configuration. `problem` carries a recoverable
/// document error when defaults had to be used.
#[derive(Debug)]
pub struct ConfigResolution {
    pub config: ResolvedConfig,
    pub problem: Option<PackError>,
}

/// Resolves configuration from the override document text (`None` when the
/// document does not exist).
///
/// # Errors
///
/// Returns `PackError::MissingWorkspace` when the context has no usable
/// workspace root. Document problems never fail resolution.
pub fn resolve(ctx: &InvocationContext, document_text: Option<&str>) -> Result<ConfigResolution> {
    ctx.workspace()?;

    let (overrides, problem) = match document_text {
        None => {
            debug!("{} not found, using defaults", CONFIG_DOCUMENT);
            (ConfigOverrides::default(), None)
        }
        Some(text) => match document::parse_object(CONFIG_DOCUMENT, text) {
            Ok(map) => (ConfigOverrides::from_map(&map), None),
            Err(e) => {
                warn!("{}", e);
                (ConfigOverrides::default(), Some(e))
            }
        },
    };

    let config = apply_defaults(&overrides, ctx.platform, &ctx.install_root_hint);
    debug!("Resolved configuration: {:?}", config);
    Ok(ConfigResolution { config, problem })
}

/// Reads the override document from the workspace root and resolves it.
pub async fn load(ctx: &InvocationContext) -> Result<ConfigResolution> {
    let root = ctx.workspace()?;
    let path = root.join(CONFIG_DOCUMENT);
    let text = crate::common::fs::io::read_optional_document(&path)
        .await
        .with_context(|| format!("Failed to read {}", CONFIG_DOCUMENT))?;
    if text.is_some() {
        info!("Loading overrides from {}", path.display());
    }
    resolve(ctx, text.as_deref())
}

/// Fills defaults and joins path values onto the game folder.
pub fn apply_defaults(
    overrides: &ConfigOverrides,
    platform: Platform,
    install_root_hint: &Path,
) -> ResolvedConfig {
    let zip_path = trimmed_or(overrides.zip_path.as_deref(), DEFAULT_ZIP_PATH);
    let mod_folder_path = trimmed_or(overrides.mod_folder_path.as_deref(), DEFAULT_MOD_FOLDER_PATH);
    let default_launcher = platform.default_launcher_name();
    let smapi_path = trimmed_or(overrides.smapi_path.as_deref(), default_launcher);

    let launcher_path = join_under(install_root_hint, smapi_path);
    let launcher_overridden = launcher_path
        .file_name()
        .is_some_and(|name| name != default_launcher);

    ResolvedConfig {
        archive_output_dir: join_under(install_root_hint, zip_path),
        install_root_dir: join_under(install_root_hint, mod_folder_path),
        launcher_path,
        launcher_overridden,
        mod_version: overrides
            .mod_version
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        raw_install_subpath: strip_leading_separators(mod_folder_path).to_string(),
    }
}

fn trimmed_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Configured paths always live inside the game folder, even when written
/// with a leading separator.
fn join_under(base: &Path, configured: &str) -> PathBuf {
    base.join(strip_leading_separators(configured))
}

fn strip_leading_separators(value: &str) -> &str {
    value.trim_start_matches(['/', '\\'])
}
