//! Loading and saving `config.toml`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::tracing::span_names;

use super::Settings;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "MIKRUS_CONFIG_DIR";

/// Name of the settings file inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Owns the location of the settings file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Uses `$MIKRUS_CONFIG_DIR`, or `mikrus/` under the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if neither is available.
    pub fn new() -> ConfigResult<Self> {
        let config_dir = env::var_os(CONFIG_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("mikrus")))
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(config_dir))
    }

    /// Uses an explicit configuration directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Directory holding the settings file
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the settings file
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Reads the settings file; a missing file yields default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`] if the file
    /// exists but cannot be read or decoded.
    pub fn load_settings(&self) -> ConfigResult<Settings> {
        let path = self.config_path();
        let _span = crate::trace_operation_debug!(
            span_names::CONFIG_LOAD,
            path = %path.display()
        )
        .entered();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Writes the settings file, creating the directory if needed.
    ///
    /// On Unix the file is created with mode `0600` since it holds the API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] or [`ConfigError::Write`] on failure.
    pub fn save_settings(&self, settings: &Settings) -> ConfigResult<()> {
        let path = self.config_path();
        let _span = crate::trace_operation_debug!(
            span_names::CONFIG_SAVE,
            path = %path.display()
        )
        .entered();

        let text = toml::to_string_pretty(settings)?;
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Write {
            path: self.config_dir.clone(),
            source,
        })?;
        write_private(&path, &text).map_err(|source| ConfigError::Write { path, source })?;

        tracing::info!("Settings saved");
        Ok(())
    }
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    fs::write(path, contents)
}
