//! Parser for `free` output
//!
//! Expected layout (values in the unit `free` was asked for, usually MiB):
//!
//! ```text
//!               total        used        free      shared  buff/cache   available
//! Mem:           1024          43         816           0         164         980
//! Swap:             0           0           0
//! ```

use serde::{Deserialize, Serialize};

use super::error::{DiagnosticsError, DiagnosticsResult, Utility};
use super::tokenize::{fields, lines, unsigned};

/// Memory and swap usage as reported by `free`.
///
/// Values are copied positionally; `used + free + shared + cache` is not
/// required to add up to `total` because `free` rounds each column on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryUsage {
    /// Total installed memory
    pub total: u64,
    /// Memory in use
    pub used: u64,
    /// Unused memory
    pub free: u64,
    /// Memory used by tmpfs and shared segments
    pub shared: u64,
    /// Buffers and page cache
    pub cache: u64,
    /// Estimate of memory available for new processes
    pub available: u64,
    /// Total swap space
    pub swap_total: u64,
    /// Swap in use
    pub swap_used: u64,
    /// Unused swap
    pub swap_free: u64,
}

/// Parses the full output of `free`, header row first.
///
/// # Errors
///
/// Returns [`DiagnosticsError::MalformedInput`] if there are fewer than three
/// lines, a row has the wrong number of columns, or a value is not an
/// unsigned integer.
pub fn parse_memory_usage(input: &str) -> DiagnosticsResult<MemoryUsage> {
    let rows = lines(input);
    if rows.len() < 3 {
        return Err(DiagnosticsError::layout(
            Utility::Free,
            input,
            format!("expected header, Mem and Swap rows, found {} line(s)", rows.len()),
        ));
    }

    let [total, used, free, shared, cache, available] = parse_row::<6>(rows[1])?;
    let [swap_total, swap_used, swap_free] = parse_row::<3>(rows[2])?;

    Ok(MemoryUsage {
        total,
        used,
        free,
        shared,
        cache,
        available,
        swap_total,
        swap_used,
        swap_free,
    })
}

/// Parses `<label> v1 .. vN`, ignoring what the label says
fn parse_row<const N: usize>(line: &str) -> DiagnosticsResult<[u64; N]> {
    let parts = fields(line);
    if parts.len() != N + 1 {
        return Err(DiagnosticsError::layout(
            Utility::Free,
            line,
            format!("expected a label and {N} values, found {} field(s)", parts.len()),
        ));
    }

    let mut values = [0u64; N];
    for (slot, raw) in values.iter_mut().zip(&parts[1..]) {
        *slot = unsigned(raw).map_err(|e| DiagnosticsError::malformed(Utility::Free, line, e))?;
    }
    Ok(values)
}
