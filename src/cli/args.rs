//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::DEFAULT_ENV;
use crate::environment::EnvironmentSettings;
use crate::error::Result;

/// Laya - Resolve and inspect a service's runtime environment.
#[derive(Debug, Parser)]
#[command(name = "laya")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config environment section to load
    #[arg(long, global = true, env = "LAYA_ENV", default_value = DEFAULT_ENV)]
    pub env: String,

    /// Root path (overrides LAYA_ROOT_PATH and detection)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Run mode (overrides LAYA_RUN_MODE)
    #[arg(long, global = true, value_name = "MODE")]
    pub run_mode: Option<String>,

    /// Application name
    #[arg(long, global = true, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Config directory name under the root path
    #[arg(long, global = true, value_name = "NAME")]
    pub conf_dir: Option<String>,

    /// Path to config file (overrides <root>/<conf dir>/config.yaml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Push the explicit flags into `settings`.
    ///
    /// # Errors
    ///
    /// Returns `RootPathConflict` if `--root` disagrees with a root path
    /// that was already fixed.
    pub fn apply_to(&self, settings: &EnvironmentSettings) -> Result<()> {
        if let Some(root) = &self.root {
            settings.set_root_path(root)?;
        }
        if let Some(mode) = &self.run_mode {
            settings.set_run_mode(mode);
        }
        if let Some(name) = &self.app_name {
            settings.set_app_name(name);
        }
        if let Some(dir) = &self.conf_dir {
            settings.set_conf_dir_name(dir);
        }
        Ok(())
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved environment (default if no command specified)
    Info,

    /// Show the loaded configuration section
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
