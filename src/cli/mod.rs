//! Command-line interface for Laya.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ConfigArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
