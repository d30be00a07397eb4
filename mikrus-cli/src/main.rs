//! `mikctl` - Command-line client for Mikrus VPS servers
//!
//! Provides commands for showing server details, listing servers and task
//! logs, fetching parsed diagnostics, parsing saved `free`/`df`/`uptime`/`ps`
//! output and managing the settings file.

mod cli;
mod commands;
mod error;
mod format;
mod report;
mod util;

use clap::Parser;
use cli::Cli;
use mikrus_core::{TracingConfig, TracingLevel, TracingOutput, init_tracing};
use util::Overrides;

fn main() {
    let cli = Cli::parse();

    if let Some(config) = tracing_config(&cli) {
        if let Err(e) = init_tracing(&config) {
            eprintln!("Warning: {e}");
        }
    }

    let overrides = Overrides {
        config_path: cli.config.as_deref(),
        api_key: cli.api_key.as_deref(),
        srv_id: cli.srv_id.as_deref(),
    };
    let result = commands::dispatch(&overrides, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

/// Logging is off unless `-v` is given or a log file is named; `-q` only
/// silences the stderr variant
fn tracing_config(cli: &Cli) -> Option<TracingConfig> {
    let level = TracingLevel::from_verbosity(cli.verbose);
    match &cli.log_file {
        Some(path) => Some(
            TracingConfig::new()
                .with_level(level)
                .with_output(TracingOutput::File { path: path.clone() }),
        ),
        None if cli.verbose > 0 && !cli.quiet => Some(TracingConfig::new().with_level(level)),
        None => None,
    }
}
