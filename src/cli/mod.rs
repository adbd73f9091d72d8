//! Command-line interface.
//!
//! Every action input can come from a flag, from the `INPUT_*` variable an
//! action runner exports, or from a `--config` TOML file, in that order of
//! precedence.

pub mod cleanup;
pub mod completions;
pub mod output;
pub mod prepare;

use std::path::{Path, PathBuf};

use clap::builder::{FalseyValueParser, OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::core::config::{Settings, SettingsFile};
use crate::core::exec::System;
use crate::core::lifecycle::{self, Context, Phase, Report};
use crate::core::store::GitConfig;
use crate::error::{ConfigError, FsError, Result};

/// deploy-keys - per-repository SSH deploy keys for CI builds.
#[derive(Parser)]
#[command(
    name = "deploy-keys",
    about = "Per-repository SSH deploy keys for CI builds",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with default inputs
    #[arg(long, global = true, value_name = "PATH", env = "DEPLOY_KEYS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub inputs: Inputs,

    #[command(subcommand)]
    pub command: Command,
}

/// Action inputs.
#[derive(Args, Debug, Default, Clone)]
pub struct Inputs {
    /// Alternating base64 repository (owner/name) and base64 private key lines
    #[arg(
        long,
        global = true,
        value_name = "LINES",
        env = "INPUT_DEPENDENCIES",
        hide_env_values = true
    )]
    pub dependencies: Option<String>,

    /// Shell command to run before provisioning
    #[arg(long, global = true, value_name = "COMMAND", env = "INPUT_CUSTOM-PREPARE")]
    pub custom_prepare: Option<String>,

    /// Shell command to run in the cleanup phase
    #[arg(long, global = true, value_name = "COMMAND", env = "INPUT_CUSTOM-CLEANUP")]
    pub custom_cleanup: Option<String>,

    /// Only write the companion script; skip hooks and provisioning
    #[arg(
        long,
        global = true,
        env = "INPUT_EXPORT-ONLY",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub export_only: bool,

    /// Write a self-contained bash version of this tool to PATH
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "INPUT_EXPORT-SCRIPT",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub export_script: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Provision deploy keys and rewrite git/SSH configuration (pre-build)
    Prepare,

    /// Run the custom cleanup command (post-build)
    Cleanup,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Inputs {
    /// Build run settings, filling gaps from the optional settings file.
    pub fn into_settings(self, config: Option<&Path>) -> Result<Settings> {
        let settings = Settings {
            dependencies: self.dependencies,
            custom_prepare: self.custom_prepare,
            custom_cleanup: self.custom_cleanup,
            export_only: self.export_only,
            export_script: self.export_script,
        };
        let file = match config {
            Some(path) => SettingsFile::load(path)?,
            None => SettingsFile::default(),
        };
        Ok(settings.merge(file))
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Completions { shell } => completions::execute(shell),
        Command::Prepare => {
            let settings = cli.inputs.into_settings(cli.config.as_deref())?;
            prepare::execute(&settings, &home_dir()?)
        }
        Command::Cleanup => {
            let settings = cli.inputs.into_settings(cli.config.as_deref())?;
            cleanup::execute(&settings, &home_dir()?)
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| ConfigError::NoHome.into())
}

/// Run `phase` with real processes, `git config` and terminal output.
///
/// The local store is the repository containing the current directory.
fn run_phase(phase: Phase, settings: &Settings, home: &Path) -> Result<Report> {
    let cwd = std::env::current_dir().map_err(|source| FsError::Read {
        path: ".".into(),
        source,
    })?;

    let mut global = GitConfig::global();
    let mut local = GitConfig::local(cwd);
    let mut sink = output::Terminal;
    let mut ctx = Context {
        home,
        runner: &System,
        global: &mut global,
        local: &mut local,
        sink: &mut sink,
    };
    lifecycle::run(phase, settings, &mut ctx)
}
