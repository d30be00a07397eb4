//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use mikrus_core::Utility;

/// Command-line client for the Mikrus VPS management API
#[derive(Parser)]
#[command(name = "mikctl")]
#[command(author, version, about = "Command-line client for Mikrus VPS servers")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "MIKRUS_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// API key from the Mikrus panel (overrides the config file)
    #[arg(long, global = true, env = "MIKRUS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Server identifier, e.g. a123 (overrides the config file)
    #[arg(long, global = true, env = "MIKRUS_SRV_ID")]
    pub srv_id: Option<String>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except command results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr (level still set by -v)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show details of the server
    #[command(visible_alias = "server")]
    Info {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// List all servers on the account
    Servers {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Show the last ten entries of the server task log
    Logs {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Fetch and show memory, disk, uptime and process diagnostics
    Stats {
        /// Which part of the diagnostics to show
        #[arg(short, long, default_value = "all", value_enum)]
        section: Section,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: ReportFormat,
    },

    /// Parse saved `free`, `df`, `uptime` or `ps` output
    Parse {
        /// Utility that produced the text
        #[arg(value_enum)]
        utility: UtilityArg,

        /// File to read; standard input when omitted or `-`
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: ReportFormat,
    },

    /// View or change the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate a man page
    #[command(about = "Generate a man page in roff format")]
    Manpage,
}

/// Settings file subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the settings file location and contents, API key masked
    Show,

    /// Store settings; `--api-key` and `--srv-id` given globally are saved too
    Set {
        /// API root to talk to instead of the production endpoint
        #[arg(long)]
        base_url: Option<String>,

        /// Per-call timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

/// Output format for record listings
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
    /// Output as CSV
    Csv,
}

/// Output format for diagnostics reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
}

/// Part of the `stats` response to show
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Everything
    All,
    /// `free` output
    Memory,
    /// `df` output
    Disk,
    /// `uptime` output
    Uptime,
    /// `ps` output
    Processes,
}

/// Utility names accepted by `parse`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UtilityArg {
    /// Output of `free`
    Free,
    /// Output of `df -h`
    Df,
    /// Output of `uptime`
    Uptime,
    /// Output of `ps aux` or `ps auxf`
    Ps,
}

impl From<UtilityArg> for Utility {
    fn from(arg: UtilityArg) -> Self {
        match arg {
            UtilityArg::Free => Self::Free,
            UtilityArg::Df => Self::Df,
            UtilityArg::Uptime => Self::Uptime,
            UtilityArg::Ps => Self::Ps,
        }
    }
}
