//! Error type shared by all diagnostics parsers

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use super::tokenize::excerpt;

/// The utility whose output a parser was asked to interpret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utility {
    /// `free` memory usage table
    Free,
    /// `df` disk usage table
    Df,
    /// `uptime` summary line
    Uptime,
    /// `ps aux` process listing
    Ps,
}

impl Utility {
    /// Returns the command name as typed on a shell
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Df => "df",
            Self::Uptime => "uptime",
            Self::Ps => "ps",
        }
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Low-level reason a piece of diagnostic text was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCause {
    /// A field expected to be an unsigned integer was not one
    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),
    /// A field expected to be a decimal number was not one
    #[error("invalid number: {0}")]
    Float(#[from] ParseFloatError),
    /// The text did not have the expected shape
    #[error("{0}")]
    Layout(String),
}

/// Errors produced by the diagnostics parsers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticsError {
    /// The supplied text did not match the layout expected for its utility
    #[error("malformed `{utility}` output: {cause} (input: {excerpt:?})")]
    MalformedInput {
        /// Which parser rejected the input
        utility: Utility,
        /// The offending line or whole input, truncated
        excerpt: String,
        /// Underlying conversion or layout failure
        #[source]
        cause: ParseCause,
    },
}

impl DiagnosticsError {
    /// Builds a [`DiagnosticsError::MalformedInput`], truncating `input`
    pub fn malformed(utility: Utility, input: &str, cause: impl Into<ParseCause>) -> Self {
        Self::MalformedInput {
            utility,
            excerpt: excerpt(input),
            cause: cause.into(),
        }
    }

    /// Shorthand for a layout mismatch described by `reason`
    pub fn layout(utility: Utility, input: &str, reason: impl Into<String>) -> Self {
        Self::malformed(utility, input, ParseCause::Layout(reason.into()))
    }

    /// Returns the utility whose parser raised this error
    #[must_use]
    pub const fn utility(&self) -> Utility {
        match self {
            Self::MalformedInput { utility, .. } => *utility,
        }
    }

    /// Returns the low-level cause
    #[must_use]
    pub const fn cause(&self) -> &ParseCause {
        match self {
            Self::MalformedInput { cause, .. } => cause,
        }
    }
}

/// Result type for diagnostics parsing
pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;
