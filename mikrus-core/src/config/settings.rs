//! Persistent client settings

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MikrusClient};
use crate::error::{ConfigError, ConfigResult};

/// Contents of `config.toml`
///
/// Every field is optional so a partially filled file still loads; the
/// missing pieces can come from flags or the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API key from the Mikrus panel
    #[serde(
        serialize_with = "serialize_api_key",
        deserialize_with = "deserialize_api_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<SecretString>,
    /// Server identifier, e.g. `a123`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    /// API root, defaults to the production endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Per-call timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Fills unset fields from `other`
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self {
            api_key: self.api_key.or(other.api_key),
            server_id: self.server_id.or(other.server_id),
            base_url: self.base_url.or(other.base_url),
            timeout_secs: self.timeout_secs.or(other.timeout_secs),
        }
    }

    /// API root, falling back to the production endpoint
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Per-call timeout, falling back to the default
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// API key with all but the last four characters hidden
    #[must_use]
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| mask(key.expose_secret()))
    }

    /// Builds an API client from the resolved settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if the API key or the server id
    /// is not set, and [`ConfigError::ZeroTimeout`] for `timeout_secs = 0`.
    /// HTTP client construction failures are reported as
    /// [`crate::MikrusError::Api`].
    pub fn client(&self) -> crate::MikrusResult<MikrusClient> {
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout.into());
        }
        let api_key = self.api_key.clone().ok_or(ConfigError::MissingField {
            field: "API key",
            flag: "--api-key",
            env: "MIKRUS_API_KEY",
        })?;
        let server_id = self.require_server_id()?;

        let client = MikrusClient::with_timeout(api_key, server_id, self.timeout())?
            .with_base_url(self.base_url());
        Ok(client)
    }

    fn require_server_id(&self) -> ConfigResult<&str> {
        self.server_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "server id",
                flag: "--srv-id",
                env: "MIKRUS_SRV_ID",
            })
    }
}

fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

#[allow(clippy::ref_option)]
fn serialize_api_key<S: Serializer>(
    key: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match key {
        Some(key) => serializer.serialize_str(key.expose_secret()),
        None => serializer.serialize_none(),
    }
}

fn deserialize_api_key<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SecretString>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}
