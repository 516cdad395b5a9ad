//! # sdvpack Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout sdvpack. Each variant
//! corresponds to one failure class of the packaging pipeline, so command
//! handlers can decide whether a failure is fatal or can degrade gracefully.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PackError`: A custom error enum using `thiserror` for the pipeline's failure classes
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The failure classes are:
//! - Missing workspace context or game folder (fatal to the whole invocation)
//! - Malformed override/ignore documents (recoverable, defaults apply)
//! - Filesystem failures while scanning, archiving, or deploying (fatal to the operation)
//! - Launch construction/execution failures (reported, never roll back a pack or deploy)
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !root.is_dir() {
//!     anyhow::bail!(PackError::MissingWorkspace(format!("{} is not a directory", root.display())));
//! }
//!
//! // Recoverable errors are inspected rather than propagated
//! if let Some(problem) = &resolution.problem {
//!     warn!("{}", problem);
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the sdvpack pipeline.
#[derive(Error, Debug)]
pub enum PackError {
    #[error("No workspace folder available: {0}")]
    MissingWorkspace(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A config or ignore document could not be parsed after sanitizing.
    /// Callers fall back to defaults (or an empty ignore list) and continue.
    #[error("{document} has invalid JSON ({message}). Using defaults.")]
    MalformedDocument { document: String, message: String },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Failed to read workspace directory '{}': {message}", path.display())]
    Scan { path: PathBuf, message: String },

    #[error("Error creating ZIP '{}': {message}", path.display())]
    Archive { path: PathBuf, message: String },

    #[error("Failed to deploy '{item}': {message}")]
    Deploy { item: String, message: String },

    #[error("Failed to launch SMAPI: {0}")]
    Launch(String),
}

impl PackError {
    /// Whether the pipeline can continue after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PackError::MalformedDocument { .. })
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
