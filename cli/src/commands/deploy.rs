//! # sdvpack Deploy Command
//!
//! File: cli/src/commands/deploy.rs
//!
//! ## Overview
//!
//! Implements `sdvpack deploy`: copies the filtered workspace into
//! `<ModFolderPath>/<workspace>` inside the game folder, overwriting files
//! that already exist there. With `--launch`, SMAPI is started afterwards.
//!
//! A launch failure is reported on its own; the deployed files stay in place.
//!
//! ```bash
//! sdvpack deploy --launch
//! ```
//!
use crate::commands::report_problems;
use crate::common::process::LaunchCommand;
use crate::core::config::ResolvedConfig;
use crate::core::context::InvocationContext;
use crate::core::error::Result;
use crate::core::pipeline;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `sdvpack deploy`.
#[derive(Parser, Debug, Default)]
pub struct DeployArgs {
    /// Start SMAPI after the files are deployed.
    #[arg(long, short = 'l')]
    pub launch: bool,
}

/// Handles `sdvpack deploy`.
pub async fn handle_deploy(args: DeployArgs, ctx: &InvocationContext) -> Result<()> {
    let config = run_deploy(ctx).await?;
    if args.launch {
        launch_after_deploy(&config, ctx).await?;
    }
    Ok(())
}

/// Runs the deploy step and prints the result. Shared with `release`.
pub(crate) async fn run_deploy(ctx: &InvocationContext) -> Result<ResolvedConfig> {
    info!("Handling deploy command...");
    println!("Began deploy process");
    let outcome = pipeline::deploy(ctx)
        .await
        .context("Failed to deploy files")?;
    report_problems(&outcome.problems);
    println!(
        "Deployed {} items to {}",
        outcome.copied,
        outcome.target.display()
    );
    Ok(outcome.config)
}

/// Builds and runs the launch command for an already deployed mod.
pub(crate) async fn launch_after_deploy(
    config: &ResolvedConfig,
    ctx: &InvocationContext,
) -> Result<()> {
    let command = LaunchCommand::from_config(config)?;
    println!("{}", command.render_shell_line(ctx.platform));
    command.spawn().await?;
    println!("SMAPI exited.");
    Ok(())
}
