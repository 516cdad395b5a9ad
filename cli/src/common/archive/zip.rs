//! # sdvpack ZIP Archive Builder (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//!
//! ## Overview
//!
//! This module writes the filtered workspace entries into a `.zip` file for
//! distribution (`sdvpack pack`). The archive is named after the workspace
//! folder plus the optional mod version:
//!
//! ```text
//! <workspace-name>.zip
//! <workspace-name>_<mod-version>.zip
//! ```
//!
//! ## Architecture
//!
//! The module leverages the `zip` crate for the container format, with every
//! file deflated at the best compression level.
//!
//! - Directory entries become directory records, so extraction restores empty
//!   folders too.
//! - File entries are streamed from disk into the archive under their
//!   `/`-separated relative path.
//! - The archive is written to a uniquely named temporary file next to the
//!   final path (`.<name>.zip.XXXXXX.partial`, via `tempfile`). Only after every
//!   entry is written, the central directory is finalized and the file is
//!   synced to disk, is it renamed over `<name>.zip`. On any error the
//!   temporary file is removed, so a truncated archive never sits at the
//!   final path.
//! - Two packs of the same workspace never share a temporary file. Each one
//!   renames a complete archive into place and the last rename wins.
//!
//! ## Usage
//!
//! ```rust
//! let report = zip::build_archive(&entries, workspace_root, &cfg.archive_output_dir, "MyMod", &cfg.mod_version)?;
//! println!("ZIP created: {} ({} total bytes)", report.path.display(), report.bytes);
//! ```
//!
use crate::common::fs::io::ensure_dir_exists;
use crate::common::fs::scan::Entry;
use crate::core::error::{PackError, Result};
use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::SimpleFileOptions; // Per-record options (method, level)
use zip::{CompressionMethod, ZipWriter};

/// Best-ratio deflate level.
const COMPRESSION_LEVEL: i64 = 9;

const TEMP_SUFFIX: &str = ".partial";

/// Outcome of a successful archive build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub path: PathBuf,
    /// Size of the finished archive on disk.
    pub bytes: u64,
    /// Number of records (files and directories) written.
    pub entries: usize,
}

/// `<workspace>[_<version>].zip`
pub fn archive_file_name(workspace_name: &str, mod_version: &str) -> String {
    if mod_version.is_empty() {
        format!("{}.zip", workspace_name)
    } else {
        format!("{}_{}.zip", workspace_name, mod_version)
    }
}

/// Builds the archive for `entries` (already filtered) under `output_dir`.
///
/// # Errors
///
/// Returns `PackError::Archive` if the output directory cannot be created, a
/// workspace file cannot be read, or the archive cannot be finalized. The
/// temporary file is removed in every failure case.
pub fn build_archive(
    entries: &[Entry],
    workspace_root: &Path,
    output_dir: &Path,
    workspace_name: &str,
    mod_version: &str,
) -> Result<ArchiveReport> {
    let file_name = archive_file_name(workspace_name, mod_version);
    let final_path = output_dir.join(&file_name);
    let archive_error = |message: String| PackError::Archive {
        path: final_path.clone(),
        message,
    };

    // The temp file must live next to the final path so the rename stays on one filesystem.
    ensure_dir_exists(output_dir)
        .map_err(|e| archive_error(format!("cannot create output folder: {:#}", e)))?;

    // Unique name per run; dropped (and deleted) on any early return below.
    let mut temp = tempfile::Builder::new()
        .prefix(&format!(".{}.", file_name))
        .suffix(TEMP_SUFFIX)
        .tempfile_in(output_dir)
        .map_err(|e| archive_error(format!("cannot create temporary archive: {}", e)))?;
    debug!("Writing archive through {}", temp.path().display());

    info!(
        "Writing {} entries to {}",
        entries.len(),
        final_path.display()
    );
    let file = write_entries(temp.as_file_mut(), entries, workspace_root).map_err(archive_error)?;

    // Central directory is written; make sure it reaches the disk before the rename.
    file.flush()
        .and_then(|_| file.sync_all())
        .map_err(|e| archive_error(format!("failed to flush archive: {}", e)))?;
    let bytes = file
        .metadata()
        .map_err(|e| archive_error(e.to_string()))?
        .len();

    // Atomic replace: readers see either the previous archive or this one.
    temp.persist(&final_path).map_err(|e| {
        archive_error(format!("failed to move archive into place: {}", e.error))
    })?;

    info!("ZIP created: {} ({} total bytes)", final_path.display(), bytes);
    Ok(ArchiveReport {
        path: final_path,
        bytes,
        entries: entries.len(),
    })
}

/// Streams every entry into a zip container and returns the finalized writer.
fn write_entries<W: Write + Seek>(
    sink: W,
    entries: &[Entry],
    workspace_root: &Path,
) -> std::result::Result<W, String> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));
    let mut writer = ZipWriter::new(sink);

    for entry in entries {
        // Directory records keep empty folders in the archive.
        if entry.is_directory {
            writer
                .add_directory(entry.relative_path.as_str(), options)
                .map_err(|e| format!("{}: {}", entry.relative_path, e))?;
            debug!("Added directory {}", entry.relative_path);
            continue;
        }

        // Stream the file in; it is never loaded whole into memory.
        let source = workspace_root.join(&entry.relative_path);
        let mut input =
            File::open(&source).map_err(|e| format!("{}: {}", source.display(), e))?;
        writer
            .start_file(entry.relative_path.as_str(), options)
            .map_err(|e| format!("{}: {}", entry.relative_path, e))?;
        io::copy(&mut input, &mut writer)
            .map_err(|e| format!("{}: {}", source.display(), e))?;
        debug!("Added file {}", entry.relative_path);
    }

    // Writes the central directory and hands the sink back.
    writer
        .finish()
        .map_err(|e| format!("failed to finalize archive: {}", e))
}
