//! Mikrus Core Library
//!
//! This crate provides the core functionality for `mikctl`, the command-line
//! client for the Mikrus VPS management API.
//!
//! # Crate Structure
//!
//! - [`diagnostics`] - Parsers for `free`, `df`, `uptime` and `ps` output
//! - [`api`] - HTTP client and response models
//! - [`config`] - Settings file and credential resolution
//! - [`error`] - Shared error types
//! - [`tracing`] - Structured logging setup and span names

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod tracing;

pub use api::{
    ApiError, ApiResult, LogEntry, MikrusClient, RawStats, Server, ServerDiagnostics,
};
pub use config::{ConfigManager, Settings};
pub use diagnostics::{
    DiagnosticsError, DiagnosticsResult, DiskSpace, MemoryUsage, ParseCause, ProcessRecord,
    UptimeReport, Utility, parse_disk_space, parse_memory_usage, parse_process_list, parse_uptime,
};
pub use error::{ConfigError, ConfigResult, MikrusError, MikrusResult};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
    span_names,
};
