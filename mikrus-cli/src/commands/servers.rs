//! List servers command.

use mikrus_core::Server;

use crate::cli::OutputFormat;
use crate::commands::info::{CSV_HEADER, csv_row};
use crate::error::CliError;
use crate::format::{csv_line, format_table, or_dash};
use crate::util::{Overrides, block_on, create_client, to_json};

/// List servers command handler
pub fn cmd_servers(overrides: &Overrides<'_>, format: OutputFormat) -> Result<(), CliError> {
    let client = create_client(overrides)?;
    let servers = block_on(client.servers())??;
    tracing::info!(count = servers.len(), "Fetched server list");

    let output = match format {
        OutputFormat::Table => format_servers_table(&servers),
        OutputFormat::Json => to_json(&servers)?,
        OutputFormat::Csv => format_servers_csv(&servers),
    };
    println!("{output}");
    Ok(())
}

/// Format servers as a table string
#[must_use]
pub fn format_servers_table(servers: &[Server]) -> String {
    if servers.is_empty() {
        return "No servers found.".to_string();
    }

    let rows: Vec<Vec<String>> = servers
        .iter()
        .map(|s| {
            vec![
                s.server_id.clone(),
                or_dash(s.server_name.as_deref()),
                or_dash(Some(&s.expires)),
                or_dash(Some(&s.param_ram)),
                or_dash(Some(&s.param_disk)),
                if s.is_pro() { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    format_table(&["ID", "NAME", "EXPIRES", "RAM", "DISK", "PRO"], &rows)
}

/// Format servers as CSV string
#[must_use]
pub fn format_servers_csv(servers: &[Server]) -> String {
    let mut lines = vec![csv_line(&CSV_HEADER)];
    lines.extend(servers.iter().map(|s| csv_line(&csv_row(s))));
    lines.join("\n")
}
