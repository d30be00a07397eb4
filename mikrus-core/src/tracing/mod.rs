//! Tracing integration for structured logging
//!
//! `mikctl` is quiet by default. When verbosity or a log file is requested
//! the CLI calls [`init_tracing`] once, and the spans named in [`span_names`]
//! show up around API calls, configuration access and diagnostics parsing.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Crates whose events pass the default filter
const OWN_TARGETS: [&str; 2] = ["mikrus_core", "mikctl"];

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// Failed to create log file
    #[error("Failed to create log file: {0}")]
    FileCreationFailed(String),
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Tracing log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TracingLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Errors, warnings and info
    Info,
    /// All above plus debug messages
    Debug,
    /// Everything
    Trace,
}

impl TracingLevel {
    /// Converts to tracing crate's Level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Maps a `-v` count to a level: none is `warn`, three or more is `trace`
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Output destination for tracing logs; never stdout, which carries
/// command results
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Output to stderr
    #[default]
    Stderr,
    /// Output to a file without ANSI colors, truncated on start
    File {
        /// Path to the log file
        path: PathBuf,
    },
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Custom filter string (overrides level if set)
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Filter directive used when no custom filter is set
    #[must_use]
    pub fn filter_directive(&self) -> String {
        self.filter.clone().unwrap_or_else(|| {
            OWN_TARGETS
                .iter()
                .map(|target| format!("{target}={}", self.level))
                .collect::<Vec<_>>()
                .join(",")
        })
    }
}

/// Initializes the tracing subscriber with the given configuration
///
/// This function should be called once at startup. A failed call leaves
/// tracing uninitialized, so it may be retried with a corrected config.
///
/// # Errors
///
/// Returns an error if:
/// - Tracing has already been initialized
/// - The filter directive is invalid
/// - File output is configured but the file cannot be created
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.load(Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_new(config.filter_directive())
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    match &config.output {
        TracingOutput::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .try_init(),
        TracingOutput::File { path } => {
            let file = std::fs::File::create(path)
                .map_err(|e| TracingError::FileCreationFailed(e.to_string()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()
        }
    }
    .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    TRACING_INITIALIZED.store(true, Ordering::SeqCst);
    tracing::debug!(level = %config.level, "Tracing initialized");

    Ok(())
}

/// Macro for creating operation spans with standard fields
///
/// # Examples
///
/// ```ignore
/// use mikrus_core::trace_operation;
///
/// let _span = trace_operation!("diagnostics.parse", utility = %utility);
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Macro for creating debug-level operation spans
///
/// Similar to `trace_operation!` but at debug level for chattier operations.
#[macro_export]
macro_rules! trace_operation_debug {
    ($name:expr) => {
        tracing::debug_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::debug_span!($name, $($field)*)
    };
}

/// Standard span names
pub mod span_names {
    /// One request to the Mikrus API
    pub const API_CALL: &str = "api.call";
    /// Configuration load span
    pub const CONFIG_LOAD: &str = "config.load";
    /// Configuration save span
    pub const CONFIG_SAVE: &str = "config.save";
    /// Parsing of one diagnostics text
    pub const DIAGNOSTICS_PARSE: &str = "diagnostics.parse";
}
