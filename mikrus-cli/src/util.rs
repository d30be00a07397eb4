//! Shared utility functions used across command modules.

use std::io::Read;
use std::path::Path;

use mikrus_core::{ConfigManager, MikrusClient, Settings};
use secrecy::SecretString;

use crate::error::CliError;

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides<'a> {
    /// Configuration directory
    pub config_path: Option<&'a Path>,
    /// `--api-key` / `MIKRUS_API_KEY`
    pub api_key: Option<&'a str>,
    /// `--srv-id` / `MIKRUS_SRV_ID`
    pub srv_id: Option<&'a str>,
}

impl Overrides<'_> {
    /// Settings built from the overrides alone
    pub fn settings(&self) -> Settings {
        Settings {
            api_key: self.api_key.map(|key| SecretString::from(key.to_string())),
            server_id: self.srv_id.map(str::to_string),
            ..Settings::default()
        }
    }
}

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Merges the overrides over the settings file
pub fn resolve_settings(overrides: &Overrides<'_>) -> Result<Settings, CliError> {
    let file = create_config_manager(overrides.config_path)?.load_settings()?;
    Ok(overrides.settings().or(file))
}

/// Builds an API client from the resolved settings
pub fn create_client(overrides: &Overrides<'_>) -> Result<MikrusClient, CliError> {
    let settings = resolve_settings(overrides)?;
    let client = settings.client()?;
    tracing::debug!(
        server_id = client.server_id(),
        base_url = client.base_url(),
        "API client ready"
    );
    Ok(client)
}

/// Runs a future to completion on a fresh current-thread runtime
pub fn block_on<F: std::future::Future>(future: F) -> Result<F::Output, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Config(format!("Failed to create async runtime: {e}")))?;
    Ok(runtime.block_on(future))
}

/// Reads a whole file, or standard input when `path` is `None` or `-`
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Serializes a value as pretty JSON
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))
}
