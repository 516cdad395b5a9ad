//! # sdvpack Mirror Copy (`common::fs::copy`)
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! This module replicates the filtered workspace entries into the game's mod
//! folder (`sdvpack deploy`). Only the entries that survived the ignore filter
//! are copied; anything else already present in the target is left alone.
//!
//! ## Architecture
//!
//! Entries are processed in scan order:
//! - A directory entry creates the matching directory under the target (no-op
//!   if it already exists).
//! - A file entry ensures its parent directory exists, then copies the file
//!   with `fs_extra`, overwriting whatever is at the destination.
//!
//! The first failure stops the copy and is returned as `PackError::Deploy`
//! naming the entry that failed. Items copied before the failure stay in
//! place.
//!
//! ## Usage
//!
//! ```rust
//! let target = cfg.install_root_dir.join(&workspace_name);
//! let copied = copy::mirror_entries(&entries, workspace_root, &target)?;
//! println!("Deployed {} items to {}", copied, target.display());
//! ```
//!
use crate::common::fs::io::ensure_dir_exists;
use crate::common::fs::scan::Entry;
use crate::core::error::{PackError, Result};
use std::path::Path;
use tracing::{debug, info}; // Progress logging, visible with -v / -vv

/// Copies `entries` from `source_root` into `target_root`.
///
/// # Returns
///
/// The number of entries processed (files and directories).
///
/// # Errors
///
/// Returns `PackError::Deploy` if the target root cannot be created or any
/// single entry fails to copy.
pub fn mirror_entries(entries: &[Entry], source_root: &Path, target_root: &Path) -> Result<usize> {
    info!(
        "Mirroring {} entries from {:?} to {:?}",
        entries.len(),
        source_root,
        target_root
    );
    // The mod's own folder under the install root, created on first deploy.
    ensure_dir_exists(target_root).map_err(|e| PackError::Deploy {
        item: target_root.display().to_string(),
        message: format!("{:#}", e),
    })?;

    // A redeploy replaces files from the previous one.
    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;

    for entry in entries {
        let item = entry.trimmed_path();
        let source = source_root.join(item);
        let destination = target_root.join(item);
        let deploy_error = |message: String| PackError::Deploy {
            item: entry.relative_path.clone(),
            message,
        };

        // Directories are created even when empty; existing ones are left as they are.
        if entry.is_directory {
            ensure_dir_exists(&destination).map_err(|e| deploy_error(format!("{:#}", e)))?;
            continue;
        }

        // The parent's own entry may have been filtered out.
        if let Some(parent) = destination.parent() {
            ensure_dir_exists(parent).map_err(|e| deploy_error(format!("{:#}", e)))?;
        }
        fs_extra::file::copy(&source, &destination, &options)
            .map_err(|e| deploy_error(e.to_string()))?;
        debug!("Copied {:?} to {:?}", source, destination);
    }

    info!("Deployed {} items to {:?}", entries.len(), target_root);
    Ok(entries.len())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entry(path: &str) -> Entry {
        Entry {
            relative_path: path.to_string(),
            is_directory: path.ends_with('/'),
        }
    }

    #[test]
    fn test_mirror_copies_listed_entries() -> Result<()> {
        let source = tempdir()?;
        let install = tempdir()?;
        fs::write(source.path().join("a.txt"), "alpha")?;
        fs::create_dir_all(source.path().join("sub/empty"))?;
        fs::write(source.path().join("sub/b.txt"), "beta")?;
        fs::write(source.path().join("ignored.txt"), "nope")?;

        let entries = vec![
            entry("a.txt"),
            entry("sub/"),
            entry("sub/empty/"),
            entry("sub/b.txt"),
        ];
        let target = install.path().join("Mods/MyMod");
        let copied = mirror_entries(&entries, source.path(), &target)?;

        assert_eq!(copied, 4);
        assert_eq!(fs::read_to_string(target.join("a.txt"))?, "alpha");
        assert_eq!(fs::read_to_string(target.join("sub/b.txt"))?, "beta");
        assert!(target.join("sub/empty").is_dir());
        assert!(!target.join("ignored.txt").exists());
        Ok(())
    }

    #[test]
    fn test_mirror_overwrites_existing_files() -> Result<()> {
        let source = tempdir()?;
        let target = tempdir()?;
        fs::write(source.path().join("manifest.json"), "new")?;
        fs::write(target.path().join("manifest.json"), "old")?;
        fs::write(target.path().join("config.json"), "user settings")?;

        mirror_entries(&[entry("manifest.json")], source.path(), target.path())?;

        assert_eq!(fs::read_to_string(target.path().join("manifest.json"))?, "new");
        // Files the workspace does not list are untouched.
        assert_eq!(
            fs::read_to_string(target.path().join("config.json"))?,
            "user settings"
        );
        Ok(())
    }

    #[test]
    fn test_file_without_directory_entry_gets_parent_created() -> Result<()> {
        let source = tempdir()?;
        let target = tempdir()?;
        fs::create_dir(source.path().join("assets"))?;
        fs::write(source.path().join("assets/icon.png"), "png")?;

        // The "assets/" directory was filtered out, its child was not.
        mirror_entries(&[entry("assets/icon.png")], source.path(), target.path())?;
        assert!(target.path().join("assets/icon.png").is_file());
        Ok(())
    }

    #[test]
    fn test_failure_names_item_and_stops() -> Result<()> {
        let source = tempdir()?;
        let target = tempdir()?;
        fs::write(source.path().join("later.txt"), "later")?;
        let entries = vec![entry("missing.txt"), entry("later.txt")];

        let err = mirror_entries(&entries, source.path(), target.path()).unwrap_err();
        match err.downcast_ref::<PackError>() {
            Some(PackError::Deploy { item, .. }) => assert_eq!(item, "missing.txt"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!target.path().join("later.txt").exists());
        Ok(())
    }
}
