//! Parser for `df -h` output
//!
//! Only the first data row is read; it describes the volume the VPS boots
//! from. Sizes keep their human-readable suffixes because `df` mixes binary
//! and decimal units between versions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{DiagnosticsError, DiagnosticsResult, Utility};
use super::tokenize::{fields, lines};

/// Header row written by the [`fmt::Display`] implementation of [`DiskSpace`]
const DF_HEADER: &str = "Filesystem Size Used Avail Use% Mounted on";

/// Usage of the primary filesystem as reported by `df`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskSpace {
    /// Device or filesystem identifier
    pub filesystem: String,
    /// Total size, e.g. `9.8G`
    pub size: String,
    /// Space in use, e.g. `2.7G`
    pub used: String,
    /// Space available, e.g. `6.7G`
    pub available: String,
    /// Percentage in use including the `%` sign
    pub usage: String,
    /// Mount point
    pub mounted_on: String,
}

/// Parses `df` output, header row first, returning the first data row.
///
/// # Errors
///
/// Returns [`DiagnosticsError::MalformedInput`] if there is no data row or the
/// row does not consist of exactly six whitespace-separated fields.
pub fn parse_disk_space(input: &str) -> DiagnosticsResult<DiskSpace> {
    let rows = lines(input);
    if rows.len() < 2 {
        return Err(DiagnosticsError::layout(
            Utility::Df,
            input,
            format!("expected a header and a data row, found {} line(s)", rows.len()),
        ));
    }

    let row = rows[1];
    let parts = fields(row);
    let [filesystem, size, used, available, usage, mounted_on] = parts[..] else {
        return Err(DiagnosticsError::layout(
            Utility::Df,
            row,
            format!("expected 6 fields, found {}", parts.len()),
        ));
    };

    Ok(DiskSpace {
        filesystem: filesystem.to_string(),
        size: size.to_string(),
        used: used.to_string(),
        available: available.to_string(),
        usage: usage.to_string(),
        mounted_on: mounted_on.to_string(),
    })
}

impl fmt::Display for DiskSpace {
    /// Writes the record back as a two-line `df` table
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DF_HEADER}")?;
        write!(
            f,
            "{} {} {} {} {} {}",
            self.filesystem, self.size, self.used, self.available, self.usage, self.mounted_on
        )
    }
}
