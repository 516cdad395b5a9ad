//! # sdvpack Config Command
//!
//! File: cli/src/commands/config.rs
//!
//! ## Overview
//!
//! Implements `sdvpack config`: resolves `ConfigOverride.sdvextension` for the
//! current workspace and prints the result, either as aligned text or as JSON
//! (`--json`). Useful for checking where `pack` and `deploy` will write.
//!
use crate::commands::report_problems;
use crate::core::config::{self, ResolvedConfig};
use crate::core::context::InvocationContext;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;

/// Arguments for `sdvpack config`.
#[derive(Parser, Debug, Default)]
pub struct ConfigArgs {
    /// Print the configuration as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Handles `sdvpack config`.
pub async fn handle_config(args: ConfigArgs, ctx: &InvocationContext) -> Result<()> {
    let resolution = config::load(ctx).await?;
    report_problems(resolution.problem.as_slice());
    if args.json {
        let json = serde_json::to_string_pretty(&resolution.config)
            .context("Failed to serialize configuration")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&resolution.config));
    }
    Ok(())
}

fn render_text(cfg: &ResolvedConfig) -> String {
    let version = if cfg.mod_version.is_empty() {
        "(none)"
    } else {
        cfg.mod_version.as_str()
    };
    format!(
        "Archive folder: {}\nMod folder:     {}\nLauncher:       {}{}\nMod version:    {}\n",
        cfg.archive_output_dir.display(),
        cfg.install_root_dir.display(),
        cfg.launcher_path.display(),
        if cfg.launcher_overridden { " (custom)" } else { "" },
        version
    )
}
