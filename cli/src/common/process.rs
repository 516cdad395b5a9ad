//! # sdvpack Launch Command (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! After a deploy, sdvpack can start SMAPI so the freshly deployed mod is
//! loaded. This module builds the launch command from the resolved
//! configuration and, when asked, runs it.
//!
//! ## Rules
//!
//! - When the configuration names a custom launcher (its file name differs from
//!   the platform default), that executable is run as-is with no arguments.
//! - Otherwise the default SMAPI launcher in the game folder is run with
//!   `--mods-path "<mod folder>"`, where the mod folder is the configured value
//!   with leading separators removed. SMAPI resolves it against the game
//!   folder, which is also the working directory.
//! - The command is rendered for PowerShell on Windows (`& "<exe>" ...`) and for
//!   POSIX shells elsewhere (`"<exe>" ...`).
//!
use crate::core::config::ResolvedConfig;
use crate::core::context::Platform;
use crate::core::error::{PackError, Result};
use std::path::PathBuf;
use std::process::Stdio;
use tracing::{debug, info};

const MODS_PATH_FLAG: &str = "--mods-path";

/// Executable plus arguments, ready to be shown or spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub executable: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl LaunchCommand {
    /// Builds the launch command for a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `PackError::Launch` when the launcher path is not absolute.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self> {
        let executable = config.launcher_path.clone();
        if !executable.is_absolute() {
            anyhow::bail!(PackError::Launch(format!(
                "launcher path '{}' is not absolute; set --game-path to the Stardew Valley folder",
                executable.display()
            )));
        }

        let args = if config.launcher_overridden {
            Vec::new()
        } else {
            vec![
                MODS_PATH_FLAG.to_string(),
                config.raw_install_subpath.clone(),
            ]
        };

        let working_dir = executable.parent().map(PathBuf::from);
        Ok(Self {
            executable,
            args,
            working_dir,
        })
    }

    /// Argument string appended after the executable, e.g.
    /// ` --mods-path "Mods"`. Empty for custom launchers.
    pub fn argument_string(&self) -> String {
        let mut rendered = String::new();
        let mut args = self.args.iter();
        while let Some(arg) = args.next() {
            rendered.push(' ');
            rendered.push_str(arg);
            if arg == MODS_PATH_FLAG {
                if let Some(value) = args.next() {
                    rendered.push_str(&format!(" \"{}\"", value));
                }
            }
        }
        rendered
    }

    /// Line to type into a terminal on `platform`.
    pub fn render_shell_line(&self, platform: Platform) -> String {
        let quoted = format!("\"{}\"", self.executable.display());
        match platform {
            Platform::Windows => format!("& {}{}", quoted, self.argument_string()),
            Platform::Unix => format!("{}{}", quoted, self.argument_string()),
        }
    }

    /// Runs the launcher with inherited stdio and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns `PackError::Launch` if the process cannot be started or exits
    /// unsuccessfully.
    pub async fn spawn(&self) -> Result<()> {
        info!("Launching {}", self.executable.display());
        let mut command = tokio::process::Command::new(&self.executable);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        debug!("Spawning {:?}", command);

        let status = command.status().await.map_err(|e| {
            PackError::Launch(format!("{}: {}", self.executable.display(), e))
        })?;
        if !status.success() {
            anyhow::bail!(PackError::Launch(format!(
                "{} exited with {}",
                self.executable.display(),
                status
            )));
        }
        Ok(())
    }
}
