//! # sdvpack Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the sdvpack CLI, a packaging
//! and deployment tool for Stardew Valley mod workspaces. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Building the invocation context (workspace, game folder, platform)
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`pack`, `deploy`, ...) is a variant of `Commands`
//! - The shared location flags live in `ContextArgs` and are global, so they
//!   may appear before or after the subcommand
//! - All errors are propagated to this level and printed as `Error: ...`
//!
//! ## Examples
//!
//! ```bash
//! # Zip the current workspace
//! sdvpack --game-path "/games/Stardew Valley" pack
//!
//! # Deploy a specific workspace and start SMAPI, with debug logs
//! SDV_GAME_PATH="/games/Stardew Valley" sdvpack -vv deploy -w ~/mods/MyMod --launch
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (pack, deploy, release, ...)
mod common; // Shared utilities (fs, archive, process)
mod core; // Core infrastructure (errors, context, config, ignore rules, pipeline)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "sdvpack",
    about = "Package and deploy Stardew Valley mod workspaces",
    long_about = "Zip a mod workspace, copy it into the game's Mods folder, and launch SMAPI.\n\
                  Honors ConfigOverride.sdvextension and IgnoreFiles.sdvextension in the workspace.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    context: commands::ContextArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "p")]
    Pack(commands::pack::PackArgs),
    #[command(alias = "d")]
    Deploy(commands::deploy::DeployArgs),
    /// Pack, then deploy if packing succeeded.
    #[command(alias = "r")]
    Release(commands::release::ReleaseArgs),
    #[command(alias = "l")]
    Launch(commands::launch::LaunchArgs),
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.context.to_context() {
        Ok(ctx) => match cli.command {
            Commands::Pack(args) => commands::pack::handle_pack(args, &ctx).await,
            Commands::Deploy(args) => commands::deploy::handle_deploy(args, &ctx).await,
            Commands::Release(args) => commands::release::handle_release(args, &ctx).await,
            Commands::Launch(args) => commands::launch::handle_launch(args, &ctx).await,
            Commands::Config(args) => commands::config::handle_config(args, &ctx).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
