//! Error types shared across the crate

use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;
use crate::diagnostics::DiagnosticsError;

/// Errors from reading or writing the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no configuration directory and none was given
    #[error("Could not determine a configuration directory; set MIKRUS_CONFIG_DIR or pass --config")]
    NoConfigDir,

    /// The settings file exists but cannot be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`crate::config::Settings`]
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Decoder error
        #[source]
        source: toml::de::Error,
    },

    /// The settings could not be encoded as TOML
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The settings file or its directory cannot be written
    #[error("Failed to write {path}: {source}")]
    Write {
        /// File that was written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A required setting is absent from flags, environment and file
    #[error("Missing {field}; pass {flag}, set {env} or run `mikctl config set {flag} ...`")]
    MissingField {
        /// Setting name
        field: &'static str,
        /// Command-line flag that provides it
        flag: &'static str,
        /// Environment variable that provides it
        env: &'static str,
    },

    /// The per-call timeout would make every request fail
    #[error("Timeout must be at least 1 second; fix timeout_secs or run `mikctl config set --timeout N`")]
    ZeroTimeout,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for library consumers that want a single type
#[derive(Debug, Error)]
pub enum MikrusError {
    /// Settings could not be loaded or saved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A call to the Mikrus API failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Diagnostics text could not be parsed
    #[error(transparent)]
    Diagnostics(#[from] DiagnosticsError),

    /// Local I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using [`MikrusError`]
pub type MikrusResult<T> = Result<T, MikrusError>;
