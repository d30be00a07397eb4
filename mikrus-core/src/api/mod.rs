//! Client for the Mikrus VPS management API
//!
//! Every endpoint is a `POST` with a form-encoded body carrying the API key
//! (`key`) and the server id (`srv`); responses are JSON.

mod models;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::Instrument;

use crate::diagnostics::tokenize::excerpt;
use crate::tracing::span_names;

pub use models::{LogEntry, RawStats, Server, ServerDiagnostics};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.mikr.us";

/// Default timeout for a single API call (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors returned by [`MikrusClient`]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failed to build the HTTP client
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure: DNS, TLS, timeout, connection reset
    #[error("Mikrus API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a status other than `200 OK`
    #[error("Mikrus API `{verb}` returned {status}: {body}")]
    Status {
        /// Endpoint that was called
        verb: &'static str,
        /// HTTP status code
        status: reqwest::StatusCode,
        /// Response body, truncated
        body: String,
    },

    /// The API reported an error in the response body
    #[error("Mikrus API `{verb}` reported an error: {message}")]
    Remote {
        /// Endpoint that was called
        verb: &'static str,
        /// Message sent by the service
        message: String,
    },

    /// The response body was not the JSON we expected
    #[error("Failed to decode `{verb}` response {body:?}: {source}")]
    Decode {
        /// Endpoint that was called
        verb: &'static str,
        /// Response body, truncated
        body: String,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client bound to one API key and server
#[derive(Debug, Clone)]
pub struct MikrusClient {
    api_key: SecretString,
    server_id: String,
    base_url: String,
    http: reqwest::Client,
}

impl MikrusClient {
    /// Creates a client for the production API with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] if the HTTP client cannot be built.
    pub fn new(api_key: SecretString, server_id: impl Into<String>) -> ApiResult<Self> {
        Self::with_timeout(
            api_key,
            server_id,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Creates a client whose calls give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] if the HTTP client cannot be built.
    pub fn with_timeout(
        api_key: SecretString,
        server_id: impl Into<String>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mikctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            api_key,
            server_id: server_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        })
    }

    /// Points the client at a different API root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Server id this client acts on
    pub fn server_id(&self) -> &str {
        &self.server_id
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns details of the server.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the response cannot be decoded.
    pub async fn info(&self) -> ApiResult<Server> {
        self.call("info").await
    }

    /// Returns all servers on the account owning the API key.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the response cannot be decoded.
    pub async fn servers(&self) -> ApiResult<Vec<Server>> {
        self.call("serwery").await
    }

    /// Returns the last ten task log entries of the server.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the response cannot be decoded.
    pub async fn logs(&self) -> ApiResult<Vec<LogEntry>> {
        self.call("logs").await
    }

    /// Returns raw `free`, `df`, `uptime` and `ps` output from the server.
    ///
    /// Use [`RawStats::diagnostics`] to parse it.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the response cannot be decoded.
    pub async fn stats(&self) -> ApiResult<RawStats> {
        self.call("stats").await
    }

    async fn call<T: DeserializeOwned>(&self, verb: &'static str) -> ApiResult<T> {
        let span = crate::trace_operation_debug!(
            span_names::API_CALL,
            verb = verb,
            server_id = %self.server_id
        );

        async move {
            let url = format!("{}/{verb}", self.base_url);
            let form = [
                ("key", self.api_key.expose_secret()),
                ("srv", self.server_id.as_str()),
            ];

            let response = self.http.post(&url).form(&form).send().await?;
            let status = response.status();
            let body = response.text().await?;
            tracing::debug!(status = status.as_u16(), bytes = body.len(), "API response");

            if status != reqwest::StatusCode::OK {
                return Err(ApiError::Status {
                    verb,
                    status,
                    body: excerpt(&body),
                });
            }

            decode(verb, &body)
        }
        .instrument(span)
        .await
    }
}

/// Decodes a `200 OK` body, recognising the service's `{"error": ...}` replies
fn decode<T: DeserializeOwned>(verb: &'static str, body: &str) -> ApiResult<T> {
    if let Ok(models::ErrorBody { error }) = serde_json::from_str(body) {
        return Err(ApiError::Remote {
            verb,
            message: error,
        });
    }

    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        verb,
        body: excerpt(body),
        source,
    })
}
