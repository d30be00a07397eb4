//! CLI error types and exit codes.

use mikrus_core::{ApiError, ConfigError, DiagnosticsError, MikrusError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, I/O, usage
    pub const GENERAL_ERROR: i32 = 1;
    /// The Mikrus API could not be reached or rejected the request
    pub const API_FAILURE: i32 = 2;
    /// Diagnostics text did not have the expected layout
    pub const MALFORMED_OUTPUT: i32 = 3;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API call failed
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Diagnostics parsing failed
    #[error("{0}")]
    Diagnostics(#[from] DiagnosticsError),

    /// Result could not be rendered
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<MikrusError> for CliError {
    fn from(err: MikrusError) -> Self {
        match err {
            MikrusError::Config(e) => e.into(),
            MikrusError::Api(e) => Self::Api(e),
            MikrusError::Diagnostics(e) => Self::Diagnostics(e),
            MikrusError::Io(e) => Self::Io(e),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, output, IO)
    /// - 2: API failure
    /// - 3: Malformed diagnostics text
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(_) => exit_codes::API_FAILURE,
            Self::Diagnostics(_) => exit_codes::MALFORMED_OUTPUT,
            Self::Config(_) | Self::Output(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
