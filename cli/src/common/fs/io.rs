//! # sdvpack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small filesystem helpers shared by the pipeline stages:
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing, and
//!   rejects paths that exist but are not directories.
//! - **`read_optional_document`**: Reads a workspace document asynchronously,
//!   mapping "file not found" to `None` so callers can fall back to defaults.
//!
use crate::core::error::{PackError, Result};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// it fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(PackError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads a UTF-8 document, returning `Ok(None)` if it does not exist.
///
/// # Errors
///
/// Any read failure other than "not found" is returned with the path as
/// context.
pub async fn read_optional_document(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Document not present: {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    }
}
