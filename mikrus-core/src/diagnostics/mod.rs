//! Parsers for the diagnostic command output returned by the Mikrus API
//!
//! The `stats` endpoint runs `free`, `df`, `uptime` and `ps` on the server and
//! returns their output verbatim. Each parser here turns one of those texts
//! into a typed record or a [`DiagnosticsError`].
//!
//! Parsers are pure functions over `&str`: they do no I/O, keep no state and
//! can be called from any thread. Every parser is all-or-nothing; a single
//! unexpected row fails the whole call.

mod disk;
mod error;
mod memory;
mod process;
pub mod tokenize;
mod uptime;

pub use disk::{DiskSpace, parse_disk_space};
pub use error::{DiagnosticsError, DiagnosticsResult, ParseCause, Utility};
pub use memory::{MemoryUsage, parse_memory_usage};
pub use process::{ProcessRecord, parse_process_list};
pub use uptime::{UptimeReport, parse_uptime};
