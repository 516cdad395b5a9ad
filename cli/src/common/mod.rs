//! # sdvpack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the pipeline stages, kept separate from command
//! logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`archive`**: Writing the filtered workspace into a `.zip` file.
//! - **`fs`**: Workspace scanning, directory helpers, document reads and the deploy mirror copy.
//! - **`process`**: Building (and optionally running) the SMAPI launch command.
//!

/// Utilities for writing archive files.
pub mod archive;
/// Filesystem operations (scan, copy, I/O).
pub mod fs;
/// SMAPI launch command construction and execution.
pub mod process;
