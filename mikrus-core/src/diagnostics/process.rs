//! Parser for `ps aux` / `ps auxf` output
//!
//! ```text
//! USER       PID %CPU %MEM    VSZ   RSS TTY      STAT START   TIME COMMAND
//! root     21605  0.0  0.3   9504  3368 ?        S    16:32   0:00 bash -c cat | sh
//! root     21607  0.0  0.0   2608   596 ?        S    16:32   0:00  \_ sh
//! ```
//!
//! The COMMAND column runs to the end of the line and may contain any text,
//! including the `\_` markers `ps f` uses to draw the process tree.

use std::num::{ParseFloatError, ParseIntError};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{DiagnosticsError, DiagnosticsResult, Utility};
use super::tokenize::{fields, lines};

/// Column grammar for one `ps aux` row.
///
/// `user pid %cpu %mem vsz rss tty stat start time command`
static PS_ROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<user>\S+)\s+(?P<pid>\d+)\s+(?P<cpu>\d+(?:\.\d+)?)\s+(?P<mem>\d+(?:\.\d+)?)\s+(?P<vsz>\d+)\s+(?P<rss>\d+)\s+(?P<tty>\S+)\s+(?P<stat>[A-Za-z][A-Za-z<+]*)\s+(?P<start>\S+)\s+(?P<time>\d+(?:[:.\-]\d+)+)\s+(?P<command>\S.*?)\s*$",
    )
    .expect("PS_ROW_REGEX is a valid regex pattern")
});

/// One row of a process listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Owning user, possibly truncated by `ps` with a trailing `+`
    pub user: String,
    /// Process id
    pub pid: u64,
    /// CPU utilisation in percent
    pub cpu_percent: f64,
    /// Share of physical memory in percent
    pub memory_percent: f64,
    /// Virtual memory size (KiB)
    pub virtual_memory_size: u64,
    /// Resident set size (KiB)
    pub resident_set_size: u64,
    /// Controlling terminal, `?` when there is none
    pub tty: String,
    /// Process state code with modifiers, e.g. `Ss+`
    pub state: String,
    /// Start time or date
    pub start: String,
    /// Accumulated CPU time
    pub cpu_time: String,
    /// Full command line
    pub command: String,
}

/// Parses a process listing into records, in the order `ps` printed them.
///
/// Lines before the `USER ...` header (shell chatter from the remote side)
/// and blank lines after the last row are skipped.
///
/// # Errors
///
/// Returns [`DiagnosticsError::MalformedInput`] if there is no header row or
/// any data row does not match the column grammar. No partial list is
/// returned.
pub fn parse_process_list(input: &str) -> DiagnosticsResult<Vec<ProcessRecord>> {
    let rows = lines(input);
    let header = rows
        .iter()
        .position(|line| fields(line).first() == Some(&"USER"))
        .ok_or_else(|| DiagnosticsError::layout(Utility::Ps, input, "no `USER ...` header row"))?;

    let end = rows
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(header, |last| last.max(header));

    let mut records = Vec::with_capacity(end - header);
    for line in &rows[header + 1..=end] {
        records.push(parse_row(line)?);
    }
    Ok(records)
}

fn parse_row(line: &str) -> DiagnosticsResult<ProcessRecord> {
    let caps = PS_ROW_REGEX.captures(line).ok_or_else(|| {
        DiagnosticsError::layout(Utility::Ps, line, "row does not match the `ps aux` columns")
    })?;
    let malformed = |e: ParseIntError| DiagnosticsError::malformed(Utility::Ps, line, e);
    let malformed_float = |e: ParseFloatError| DiagnosticsError::malformed(Utility::Ps, line, e);

    Ok(ProcessRecord {
        user: caps["user"].to_string(),
        pid: caps["pid"].parse().map_err(malformed)?,
        cpu_percent: caps["cpu"].parse().map_err(malformed_float)?,
        memory_percent: caps["mem"].parse().map_err(malformed_float)?,
        virtual_memory_size: caps["vsz"].parse().map_err(malformed)?,
        resident_set_size: caps["rss"].parse().map_err(malformed)?,
        tty: caps["tty"].to_string(),
        state: caps["stat"].to_string(),
        start: caps["start"].to_string(),
        cpu_time: caps["time"].to_string(),
        command: caps["command"].to_string(),
    })
}
