//! # sdvpack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core components of the packaging pipeline that
//! do not depend on any particular command:
//! - `context`: The explicit per-invocation context (workspace, platform, game folder)
//! - `error`: Error types and the `Result` alias
//! - `document`: Comment-tolerant JSON parsing for the workspace documents
//! - `config`: Resolution of `ConfigOverride.sdvextension` into absolute paths
//! - `ignore`: Compilation of `IgnoreFiles.sdvextension` patterns and entry filtering
//! - `pipeline`: Scan + filter + pack/deploy stages as used by the commands
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For resolving configuration
//! use crate::core::error::{PackError, Result}; // For error handling
//! use crate::core::pipeline; // For running pack/deploy
//! ```
//!
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod ignore;
pub mod pipeline;
