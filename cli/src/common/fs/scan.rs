//! # sdvpack Workspace Scanner
//!
//! File: cli/src/common/fs/scan.rs
//!
//! ## Overview
//!
//! This module enumerates every file and directory beneath the workspace root
//! into an ordered list of `Entry` values. The list feeds the ignore filter and
//! then either the archive builder (`pack`) or the mirror copier (`deploy`).
//!
//! ## Ordering
//!
//! - Traversal is depth-first and pre-order: a directory's own entry is always
//!   emitted before any of its children.
//! - Siblings appear in whatever order the operating system lists them. The
//!   scanner does not sort.
//!
//! ## Path Format
//!
//! Relative paths always use `/` as the separator, whatever the host uses, so
//! ignore patterns and archive entry names behave the same on every platform.
//! Directory paths end with `/`; file paths never do. A name that is not
//! valid UTF-8 fails the scan with `PackError::Scan`, since it could neither be
//! matched by ignore patterns nor stored under its real name in the archive.
//!
//! ## Errors
//!
//! A directory that cannot be read fails the whole scan with
//! `PackError::Scan` naming the directory. Nothing is silently skipped except
//! symbolic links and special files, which are neither files nor directories
//! to the pipeline.
//!
use crate::core::error::{PackError, Result};
use std::path::Path;
use tracing::{debug, info, trace};
use walkdir::WalkDir; // Pre-order recursive traversal

/// One workspace item, relative to the workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub relative_path: String,
    pub is_directory: bool,
}

impl Entry {
    /// Relative path without the trailing `/` of directories.
    pub fn trimmed_path(&self) -> &str {
        self.relative_path.trim_end_matches('/')
    }
}

/// Scans the workspace rooted at `root`.
///
/// # Errors
///
/// Returns `PackError::Scan` if any directory in the tree cannot be read or an
/// entry name is not valid UTF-8.
pub fn scan_workspace(root: &Path) -> Result<Vec<Entry>> {
    info!("Scanning workspace {}", root.display());
    let mut entries = Vec::new();

    // min_depth(1) leaves out the root itself; links are reported, not followed.
    for result in WalkDir::new(root).min_depth(1).follow_links(false) {
        // An unreadable directory anywhere in the tree stops the scan.
        let dir_entry = result.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let message = e
                .io_error()
                .map(|io| io.to_string())
                .unwrap_or_else(|| e.to_string());
            PackError::Scan { path, message }
        })?;

        // Symlinks, sockets and FIFOs are not part of a mod.
        let file_type = dir_entry.file_type();
        if !file_type.is_dir() && !file_type.is_file() {
            debug!("Skipping special entry {}", dir_entry.path().display());
            continue;
        }

        let relative = dir_entry.path().strip_prefix(root).map_err(|_| {
            PackError::FileSystem(format!(
                "'{}' is not inside the workspace '{}'",
                dir_entry.path().display(),
                root.display()
            ))
        })?;
        // Rebuild the path with `/` separators, refusing names that would not survive the trip.
        let mut relative_path = relative
            .components()
            .map(|c| {
                c.as_os_str().to_str().ok_or_else(|| PackError::Scan {
                    path: dir_entry.path().to_path_buf(),
                    message: "file name is not valid UTF-8".to_string(),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?
            .join("/");
        if file_type.is_dir() {
            relative_path.push('/');
        }
        trace!("Found {}", relative_path);

        entries.push(Entry {
            relative_path,
            is_directory: file_type.is_dir(),
        });
    }

    info!("Found {} workspace entries", entries.len());
    Ok(entries)
}
