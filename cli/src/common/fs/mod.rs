//! # sdvpack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem functionality used by the pipeline, split by concern:
//!
//! - **`scan`**: Ordered, pre-order enumeration of the workspace into `Entry` values.
//! - **`copy`**: Mirroring a filtered entry list into the mod install folder (`deploy`).
//! - **`io`**: Directory creation (`ensure_dir_exists`) and optional document reads.
//!

/// Mirror copy of filtered entries into the install folder.
pub mod copy;
/// Basic I/O helpers (`ensure_dir_exists`, `read_optional_document`).
pub mod io;
/// Workspace enumeration (`scan_workspace`, `Entry`).
pub mod scan;
