//! # sdvpack Launch Command
//!
//! File: cli/src/commands/launch.rs
//!
//! ## Overview
//!
//! Implements `sdvpack launch`: prints the SMAPI command line built from the
//! resolved configuration and runs it. `--dry-run` only prints it.
//!
use crate::common::process::LaunchCommand;
use crate::core::config;
use crate::core::context::InvocationContext;
use crate::core::error::Result;
use clap::Parser;

/// Arguments for `sdvpack launch`.
#[derive(Parser, Debug, Default)]
pub struct LaunchArgs {
    /// Print the command without running it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Handles `sdvpack launch`.
pub async fn handle_launch(args: LaunchArgs, ctx: &InvocationContext) -> Result<()> {
    let resolution = config::load(ctx).await?;
    crate::commands::report_problems(resolution.problem.as_slice());

    let command = LaunchCommand::from_config(&resolution.config)?;
    println!("{}", command.render_shell_line(ctx.platform));
    if args.dry_run {
        return Ok(());
    }
    command.spawn().await
}
