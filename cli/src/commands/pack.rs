//! # sdvpack Pack Command
//!
//! File: cli/src/commands/pack.rs
//!
//! ## Overview
//!
//! Implements `sdvpack pack`: scans the workspace, drops everything matched by
//! `IgnoreFiles.sdvextension`, and writes the rest into
//! `<ZipPath>/<workspace>[_<ModVersion>].zip`.
//!
//! ```bash
//! sdvpack pack --game-path ~/.steam/steam/steamapps/common/Stardew\ Valley
//! ```
//!
use crate::commands::report_problems;
use crate::common::archive::zip::ArchiveReport;
use crate::core::context::InvocationContext;
use crate::core::error::Result;
use crate::core::pipeline;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// Arguments for `sdvpack pack`.
#[derive(Parser, Debug, Default)]
pub struct PackArgs {}

/// Handles `sdvpack pack`.
pub async fn handle_pack(_args: PackArgs, ctx: &InvocationContext) -> Result<()> {
    run_pack(ctx).await.map(|_| ())
}

/// Runs the pack step and prints the result. Shared with `release`.
pub(crate) async fn run_pack(ctx: &InvocationContext) -> Result<ArchiveReport> {
    info!("Handling pack command...");
    let outcome = pipeline::pack(ctx)
        .await
        .context("Packing failed")?;
    report_problems(&outcome.problems);
    debug!("Archive holds {} entries", outcome.archive.entries);
    println!(
        "ZIP created: {} ({} total bytes)",
        outcome.archive.path.display(),
        outcome.archive.bytes
    );
    println!("Packing process completed");
    Ok(outcome.archive)
}
