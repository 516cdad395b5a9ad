//! # sdvpack Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the sdvpack CLI and the
//! arguments they share. Every command builds an explicit
//! `InvocationContext` from `ContextArgs` and hands it to the pipeline.
//!
//! ## Commands
//!
//! - `pack`: Zip the filtered workspace into the archive folder
//! - `deploy`: Mirror the filtered workspace into the mod folder (optionally launch SMAPI)
//! - `release`: `pack`, then `deploy` if packing succeeded
//! - `launch`: Show or run the SMAPI launch command
//! - `config`: Show the resolved configuration
//!
use crate::core::context::{InvocationContext, Platform};
use crate::core::error::PackError;
use clap::Args;
use std::path::PathBuf;

/// Builds the archive (`sdvpack pack`).
pub mod pack;
/// Mirrors the workspace into the mod folder (`sdvpack deploy`).
pub mod deploy;
/// Pack followed by deploy (`sdvpack release`).
pub mod release;
/// Shows or runs the SMAPI launch command (`sdvpack launch`).
pub mod launch;
/// Prints the resolved configuration (`sdvpack config`).
pub mod config;

/// Arguments shared by every command, describing where things live.
#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// Mod workspace to package. Defaults to the current directory.
    #[arg(long, short = 'w', env = "SDV_WORKSPACE", global = true)]
    pub workspace: Option<PathBuf>,

    /// Stardew Valley installation folder. Relative paths in
    /// ConfigOverride.sdvextension are resolved against it.
    #[arg(long, short = 'g', env = "SDV_GAME_PATH", global = true)]
    pub game_path: Option<PathBuf>,

    /// Platform whose launcher naming applies (windows or unix).
    #[arg(long, global = true, default_value_t = Platform::current())]
    pub platform: Platform,
}

impl ContextArgs {
    /// Turns the parsed arguments into the invocation context.
    pub fn to_context(&self) -> crate::core::error::Result<InvocationContext> {
        let workspace = match &self.workspace {
            Some(path) => Some(path.clone()),
            None => std::env::current_dir().ok(),
        };
        let game_path = self.game_path.clone().ok_or_else(|| {
            PackError::Config(
                "the Stardew Valley folder is not set; pass --game-path or set SDV_GAME_PATH"
                    .to_string(),
            )
        })?;
        // Resolved paths must be absolute for the launcher.
        let game_path = std::path::absolute(&game_path).unwrap_or(game_path);
        Ok(InvocationContext::new(workspace, self.platform, game_path))
    }
}

/// Prints problems collected during a run that did not stop it.
pub(crate) fn report_problems(problems: &[PackError]) {
    for problem in problems {
        let label = if problem.is_recoverable() { "Warning" } else { "Error" };
        eprintln!("{}: {}", label, problem);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        context: ContextArgs,
    }

    #[test]
    fn test_context_args_parse() {
        let cli = TestCli::try_parse_from([
            "sdvpack",
            "--workspace",
            "/src/MyMod",
            "--game-path",
            "/games/sdv",
            "--platform",
            "windows",
        ])
        .unwrap();
        let ctx = cli.context.to_context().unwrap();
        assert_eq!(ctx.workspace_root, Some(PathBuf::from("/src/MyMod")));
        assert_eq!(ctx.install_root_hint, PathBuf::from("/games/sdv"));
        assert_eq!(ctx.platform, Platform::Windows);
    }

    #[test]
    fn test_missing_game_path_is_reported() {
        let args = ContextArgs {
            workspace: Some(PathBuf::from("/src/MyMod")),
            game_path: None,
            platform: Platform::Unix,
        };
        let err = args.to_context().unwrap_err();
        assert!(err.to_string().contains("--game-path"));
    }
}
