//! Parser for `uptime` output
//!
//! The summary line is a list of comma-separated clauses:
//!
//! ```text
//!  16:32:02 up 6 days,  8:33,  0 users,  load average: 0.10, 1.00, 0.50
//! ```
//!
//! The day clause is absent during the first day, and the elapsed clause is
//! printed as `N min` when less than an hour has passed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{DiagnosticsError, DiagnosticsResult, Utility};
use super::tokenize::{decimal, lines, split_trimmed, unsigned};

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Uptime and load summary as reported by `uptime`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeReport {
    /// Wall-clock time on the server when `uptime` ran, e.g. `16:32:02`
    pub time: String,
    /// Time since boot, minute precision; whole seconds in JSON
    #[serde(with = "whole_secs")]
    pub uptime: Duration,
    /// Number of logged-in users
    pub users: u32,
    /// Load average over the last minute
    pub load_1min: f64,
    /// Load average over the last five minutes
    pub load_5min: f64,
    /// Load average over the last fifteen minutes
    pub load_15min: f64,
}

/// Parses `uptime` output.
///
/// The first line containing `load average` is used; anything else the
/// remote shell printed around it is ignored.
///
/// # Errors
///
/// Returns [`DiagnosticsError::MalformedInput`] if no such line exists or any
/// clause deviates from the layout described in the module documentation.
pub fn parse_uptime(input: &str) -> DiagnosticsResult<UptimeReport> {
    let line = lines(input)
        .into_iter()
        .find(|l| l.contains("load average"))
        .ok_or_else(|| {
            DiagnosticsError::layout(Utility::Uptime, input, "no `load average` clause")
        })?;

    ClauseScanner::new(line).scan()
}

/// Walks the comma-separated clauses of a single `uptime` line
struct ClauseScanner<'a> {
    line: &'a str,
    clauses: std::vec::IntoIter<&'a str>,
}

impl<'a> ClauseScanner<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            clauses: split_trimmed(line, ',').into_iter(),
        }
    }

    fn scan(mut self) -> DiagnosticsResult<UptimeReport> {
        let head = self.next_clause("time and uptime")?;
        let (time, since) = head
            .split_once(" up ")
            .map(|(t, s)| (t.trim(), s.trim()))
            .ok_or_else(|| self.layout(format!("expected `<time> up ...`, found {head:?}")))?;
        if !is_clock(time) {
            return Err(self.layout(format!("invalid time of day {time:?}")));
        }

        let (days, elapsed) = match strip_unit(since, "day") {
            Some(days) => (self.integer::<u64>(days)?, self.next_clause("elapsed time")?),
            None => (0, since),
        };
        let elapsed_secs = self.elapsed_secs(elapsed)?;
        let uptime_secs = days
            .checked_mul(SECS_PER_DAY)
            .and_then(|d| d.checked_add(elapsed_secs))
            .ok_or_else(|| self.layout(format!("uptime of {days} days is out of range")))?;

        let users_clause = self.next_clause("user count")?;
        let users = strip_unit(users_clause, "user")
            .ok_or_else(|| self.layout(format!("expected `<N> users`, found {users_clause:?}")))
            .and_then(|n| self.integer::<u32>(n))?;

        let first_load = self.next_clause("1 minute load")?;
        let first_load = first_load
            .strip_prefix("load average:")
            .or_else(|| first_load.strip_prefix("load averages:"))
            .ok_or_else(|| {
                self.layout(format!("expected `load average: <f>`, found {first_load:?}"))
            })?;
        let load_1min = self.load(first_load)?;
        let load_5min = self.next_clause("5 minute load").and_then(|c| self.load(c))?;
        let load_15min = self.next_clause("15 minute load").and_then(|c| self.load(c))?;

        if let Some(extra) = self.clauses.next() {
            return Err(self.layout(format!("unexpected trailing clause {extra:?}")));
        }

        Ok(UptimeReport {
            time: time.to_string(),
            uptime: Duration::from_secs(uptime_secs),
            users,
            load_1min,
            load_5min,
            load_15min,
        })
    }

    fn next_clause(&mut self, what: &str) -> DiagnosticsResult<&'a str> {
        self.clauses
            .next()
            .ok_or_else(|| self.layout(format!("missing {what} clause")))
    }

    /// Parses `H:MM` or `N min` into seconds
    fn elapsed_secs(&self, clause: &str) -> DiagnosticsResult<u64> {
        if let Some(minutes) = strip_unit(clause, "min") {
            return self
                .integer::<u64>(minutes)?
                .checked_mul(60)
                .ok_or_else(|| self.layout(format!("minutes out of range in {clause:?}")));
        }

        let (hours, minutes) = clause
            .split_once(':')
            .ok_or_else(|| self.layout(format!("expected `H:MM`, found {clause:?}")))?;
        let hours = self.integer::<u64>(hours)?;
        let minutes = self.integer::<u64>(minutes)?;
        if minutes >= 60 {
            return Err(self.layout(format!("minutes out of range in {clause:?}")));
        }
        hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60))
            .ok_or_else(|| self.layout(format!("hours out of range in {clause:?}")))
    }

    fn integer<T>(&self, raw: &str) -> DiagnosticsResult<T>
    where
        T: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        unsigned(raw.trim())
            .map_err(|e| DiagnosticsError::malformed(Utility::Uptime, self.line, e))
    }

    fn load(&self, raw: &str) -> DiagnosticsResult<f64> {
        let value = decimal(raw.trim())
            .map_err(|e| DiagnosticsError::malformed(Utility::Uptime, self.line, e))?;
        if !value.is_finite() {
            return Err(self.layout(format!("load average {raw:?} is not a usable number")));
        }
        Ok(value)
    }

    fn layout(&self, reason: String) -> DiagnosticsError {
        DiagnosticsError::layout(Utility::Uptime, self.line, reason)
    }
}

/// Strips a trailing unit word, singular or plural: `6 days` -> `6`
fn strip_unit<'s>(clause: &'s str, unit: &str) -> Option<&'s str> {
    let rest = clause.strip_suffix('s').unwrap_or(clause);
    rest.strip_suffix(unit)
        .filter(|n| n.ends_with(char::is_whitespace))
        .map(str::trim)
}

mod whole_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

/// Accepts `HH:MM` and `HH:MM:SS`
fn is_clock(s: &str) -> bool {
    let parts: Vec<&str> = s.split(':').collect();
    (2..=3).contains(&parts.len())
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.len() <= 2 && p.bytes().all(|b| b.is_ascii_digit()))
}
