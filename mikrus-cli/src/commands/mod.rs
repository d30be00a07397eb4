//! Command handler modules for the CLI.

mod completions;
mod config;
mod info;
mod logs;
mod manpage;
mod parse;
mod servers;
mod stats;

use crate::cli::Commands;
use crate::error::CliError;
use crate::util::Overrides;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(overrides: &Overrides<'_>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Info { format } => info::cmd_info(overrides, format),
        Commands::Servers { format } => servers::cmd_servers(overrides, format),
        Commands::Logs { format } => logs::cmd_logs(overrides, format),
        Commands::Stats { section, format } => stats::cmd_stats(overrides, section, format),
        Commands::Parse {
            utility,
            file,
            format,
        } => parse::cmd_parse(utility.into(), file.as_deref(), format),
        Commands::Config { action } => config::cmd_config(overrides, action),
        Commands::Completions { shell } => completions::cmd_completions(shell),
        Commands::Manpage => manpage::cmd_manpage(),
    }
}
