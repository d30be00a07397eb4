//! Server task log command.

use mikrus_core::LogEntry;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{csv_line, format_table, or_dash};
use crate::util::{Overrides, block_on, create_client, to_json};

/// Show task log command handler
pub fn cmd_logs(overrides: &Overrides<'_>, format: OutputFormat) -> Result<(), CliError> {
    let client = create_client(overrides)?;
    let entries = block_on(client.logs())??;

    let output = match format {
        OutputFormat::Table => format_logs_table(&entries),
        OutputFormat::Json => to_json(&entries)?,
        OutputFormat::Csv => format_logs_csv(&entries),
    };
    println!("{output}");
    Ok(())
}

/// Format log entries as a table; task output is shown on its first line only
#[must_use]
pub fn format_logs_table(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No log entries found.".to_string();
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.task.clone(),
                or_dash(Some(&e.when_created)),
                or_dash(Some(&e.when_done)),
                or_dash(e.output.lines().next()),
            ]
        })
        .collect();
    format_table(&["ID", "TASK", "CREATED", "DONE", "OUTPUT"], &rows)
}

/// Format log entries as CSV string
#[must_use]
pub fn format_logs_csv(entries: &[LogEntry]) -> String {
    let mut lines = vec![csv_line(&[
        "id",
        "server_id",
        "task",
        "when_created",
        "when_done",
        "output",
    ])];
    lines.extend(entries.iter().map(|e| {
        csv_line(&[
            e.id.as_str(),
            e.server_id.as_str(),
            e.task.as_str(),
            e.when_created.as_str(),
            e.when_done.as_str(),
            e.output.as_str(),
        ])
    }));
    lines.join("\n")
}
