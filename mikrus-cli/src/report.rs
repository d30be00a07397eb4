//! Rendering of parsed diagnostics for `stats` and `parse`.

use mikrus_core::{DiskSpace, MemoryUsage, ProcessRecord, ServerDiagnostics, UptimeReport};
use serde::Serialize;

use crate::cli::ReportFormat;
use crate::error::CliError;
use crate::format::{format_details, format_table, format_uptime};
use crate::util::to_json;

/// Any diagnostics result the CLI can print
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Parsed `free` output
    Memory(MemoryUsage),
    /// Parsed `df` output
    Disk(DiskSpace),
    /// Parsed `uptime` output
    Uptime(UptimeReport),
    /// Parsed `ps` output
    Processes(Vec<ProcessRecord>),
    /// Everything from one `stats` call
    All(ServerDiagnostics),
}

impl Report {
    /// Renders the report in the requested format
    pub fn render(&self, format: ReportFormat) -> Result<String, CliError> {
        match format {
            ReportFormat::Json => to_json(self),
            ReportFormat::Table => Ok(self.table()),
        }
    }

    fn table(&self) -> String {
        match self {
            Self::Memory(memory) => memory_table(memory),
            Self::Disk(disk) => disk_table(disk),
            Self::Uptime(uptime) => uptime_table(uptime),
            Self::Processes(processes) => process_table(processes),
            Self::All(all) => [
                memory_table(&all.memory),
                disk_table(&all.disk),
                uptime_table(&all.uptime),
                process_table(&all.processes),
            ]
            .join("\n\n"),
        }
    }
}

fn memory_table(memory: &MemoryUsage) -> String {
    let rows = vec![
        vec![
            "Mem:".to_string(),
            memory.total.to_string(),
            memory.used.to_string(),
            memory.free.to_string(),
            memory.shared.to_string(),
            memory.cache.to_string(),
            memory.available.to_string(),
        ],
        vec![
            "Swap:".to_string(),
            memory.swap_total.to_string(),
            memory.swap_used.to_string(),
            memory.swap_free.to_string(),
        ],
    ];
    format_table(
        &["", "TOTAL", "USED", "FREE", "SHARED", "BUFF/CACHE", "AVAILABLE"],
        &rows,
    )
}

fn disk_table(disk: &DiskSpace) -> String {
    let row = vec![
        disk.filesystem.as_str(),
        disk.size.as_str(),
        disk.used.as_str(),
        disk.available.as_str(),
        disk.usage.as_str(),
        disk.mounted_on.as_str(),
    ];
    format_table(
        &["FILESYSTEM", "SIZE", "USED", "AVAIL", "USE%", "MOUNTED ON"],
        &[row],
    )
}

fn uptime_table(uptime: &UptimeReport) -> String {
    format_details(
        "Uptime",
        &[
            ("Time", uptime.time.clone()),
            ("Up", format_uptime(uptime.uptime)),
            ("Users", uptime.users.to_string()),
            (
                "Load",
                format!(
                    "{:.2}, {:.2}, {:.2}",
                    uptime.load_1min, uptime.load_5min, uptime.load_15min
                ),
            ),
        ],
    )
}

fn process_table(processes: &[ProcessRecord]) -> String {
    if processes.is_empty() {
        return "No processes found.".to_string();
    }

    let rows: Vec<Vec<String>> = processes
        .iter()
        .map(|p| {
            vec![
                p.user.clone(),
                p.pid.to_string(),
                format!("{:.1}", p.cpu_percent),
                format!("{:.1}", p.memory_percent),
                p.virtual_memory_size.to_string(),
                p.resident_set_size.to_string(),
                p.tty.clone(),
                p.state.clone(),
                p.start.clone(),
                p.cpu_time.clone(),
                p.command.clone(),
            ]
        })
        .collect();
    format_table(
        &[
            "USER", "PID", "%CPU", "%MEM", "VSZ", "RSS", "TTY", "STAT", "START", "TIME", "COMMAND",
        ],
        &rows,
    )
}
