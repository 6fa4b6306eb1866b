//! Laya CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use laya::cli::{Cli, CommandDispatcher};
use laya::environment;
use laya::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so command output stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("laya=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("laya=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Laya starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);
    let settings = environment::global();

    if let Err(e) = cli.apply_to(settings) {
        ui.error(&format!("Error: {}", e));
        return ExitCode::from(1);
    }

    let dispatcher = CommandDispatcher::new(settings);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            tracing::debug!(fatal = e.is_fatal(), "command failed");
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
