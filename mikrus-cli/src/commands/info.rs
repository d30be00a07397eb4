//! Server details command.

use mikrus_core::Server;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{csv_line, format_details, or_dash};
use crate::util::{Overrides, block_on, create_client, to_json};

/// Show server details command handler
pub fn cmd_info(overrides: &Overrides<'_>, format: OutputFormat) -> Result<(), CliError> {
    let client = create_client(overrides)?;
    let server = block_on(client.info())??;

    let output = match format {
        OutputFormat::Table => format_server(&server),
        OutputFormat::Json => to_json(&server)?,
        OutputFormat::Csv => format!("{}\n{}", csv_line(&CSV_HEADER), csv_line(&csv_row(&server))),
    };
    println!("{output}");
    Ok(())
}

/// Column names shared by `info` and `servers` CSV output
pub const CSV_HEADER: [&str; 9] = [
    "server_id",
    "server_name",
    "expires",
    "expires_cytrus",
    "expires_storage",
    "param_ram",
    "param_disk",
    "lastlog_panel",
    "mikrus_pro",
];

/// CSV cells for one server, in [`CSV_HEADER`] order
pub fn csv_row(server: &Server) -> [String; 9] {
    [
        server.server_id.clone(),
        server.server_name.clone().unwrap_or_default(),
        server.expires.clone(),
        server.expires_cytrus.clone().unwrap_or_default(),
        server.expires_storage.clone().unwrap_or_default(),
        server.param_ram.clone(),
        server.param_disk.clone(),
        server.lastlog_panel.clone(),
        server.mikrus_pro.clone(),
    ]
}

/// Format server details as labelled lines
#[must_use]
pub fn format_server(server: &Server) -> String {
    format_details(
        "Server Details",
        &[
            ("ID", server.server_id.clone()),
            ("Name", or_dash(server.server_name.as_deref())),
            ("Expires", or_dash(Some(&server.expires))),
            ("Cytrus expires", or_dash(server.expires_cytrus.as_deref())),
            ("Storage expires", or_dash(server.expires_storage.as_deref())),
            ("RAM (MB)", or_dash(Some(&server.param_ram))),
            ("Disk (GB)", or_dash(Some(&server.param_disk))),
            ("Last panel login", or_dash(Some(&server.lastlog_panel))),
            ("PRO", if server.is_pro() { "yes" } else { "no" }.to_string()),
        ],
    )
}
