//! Response models for the Mikrus API
//!
//! Field names follow the JSON the service sends, which is why some of them
//! are Polish or abbreviated.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{
    DiagnosticsResult, DiskSpace, MemoryUsage, ProcessRecord, UptimeReport, parse_disk_space,
    parse_memory_usage, parse_process_list, parse_uptime,
};

/// Details of a single server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Server identifier, e.g. `a123`
    pub server_id: String,
    /// Human readable name, only sent by some endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// Expiry date of the VPS
    pub expires: String,
    /// Expiry date of the Cytrus add-on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_cytrus: Option<String>,
    /// Expiry date of the storage add-on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_storage: Option<String>,
    /// Memory size in MiB
    #[serde(default)]
    pub param_ram: String,
    /// Disk size in GiB
    #[serde(default)]
    pub param_disk: String,
    /// Last login to the web panel
    #[serde(default)]
    pub lastlog_panel: String,
    /// `"1"` when the server is a Mikrus PRO instance
    #[serde(default)]
    pub mikrus_pro: String,
}

impl Server {
    /// Returns whether the server is a PRO instance
    #[must_use]
    pub fn is_pro(&self) -> bool {
        matches!(self.mikrus_pro.trim(), "1" | "tak" | "yes" | "true")
    }
}

/// One entry of the server task log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry identifier
    pub id: String,
    /// Server the task ran on
    pub server_id: String,
    /// Task name, e.g. `restart`
    pub task: String,
    /// When the task was queued
    pub when_created: String,
    /// When the task finished
    #[serde(default)]
    pub when_done: String,
    /// Task output
    #[serde(default)]
    pub output: String,
}

/// Raw output of the diagnostic commands returned by the `stats` endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStats {
    /// `free -m` output
    #[serde(default)]
    pub free: String,
    /// `df -h` output
    #[serde(default)]
    pub df: String,
    /// `uptime` output
    #[serde(default)]
    pub uptime: String,
    /// `ps auxf` output
    #[serde(default)]
    pub ps: String,
}

/// Parsed form of [`RawStats`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDiagnostics {
    /// Memory and swap usage
    pub memory: MemoryUsage,
    /// Usage of the primary filesystem
    pub disk: DiskSpace,
    /// Uptime and load averages
    pub uptime: UptimeReport,
    /// Running processes
    pub processes: Vec<ProcessRecord>,
}

impl RawStats {
    /// Runs every diagnostics parser over the raw texts.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::diagnostics::DiagnosticsError`] encountered,
    /// in the order memory, disk, uptime, processes.
    pub fn diagnostics(&self) -> DiagnosticsResult<ServerDiagnostics> {
        Ok(ServerDiagnostics {
            memory: parse_memory_usage(&self.free)?,
            disk: parse_disk_space(&self.df)?,
            uptime: parse_uptime(&self.uptime)?,
            processes: parse_process_list(&self.ps)?,
        })
    }
}

/// Error body the API sends with a `200 OK` status
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
