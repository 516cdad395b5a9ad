//! # sdvpack Release Command
//!
//! File: cli/src/commands/release.rs
//!
//! ## Overview
//!
//! Implements `sdvpack release`, the "deploy and pack" workflow: the archive
//! is built first and, only if that succeeds, the workspace is deployed (and
//! optionally launched).
//!
use crate::commands::{deploy, pack};
use crate::core::context::InvocationContext;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `sdvpack release`.
#[derive(Parser, Debug, Default)]
pub struct ReleaseArgs {
    /// Start SMAPI after the files are deployed.
    #[arg(long, short = 'l')]
    pub launch: bool,
}

/// Handles `sdvpack release`.
pub async fn handle_release(args: ReleaseArgs, ctx: &InvocationContext) -> Result<()> {
    info!("Handling release command...");
    pack::run_pack(ctx)
        .await
        .context("Release stopped before deploy")?;
    let config = deploy::run_deploy(ctx).await?;
    if args.launch {
        deploy::launch_after_deploy(&config, ctx).await?;
    }
    Ok(())
}
