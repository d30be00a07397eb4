//! Settings file commands.

use std::path::Path;

use mikrus_core::{ConfigManager, Settings};

use crate::cli::ConfigAction;
use crate::error::CliError;
use crate::format::{format_details, or_dash};
use crate::util::{Overrides, create_config_manager};

/// Config command handler
pub fn cmd_config(overrides: &Overrides<'_>, action: ConfigAction) -> Result<(), CliError> {
    let manager = create_config_manager(overrides.config_path)?;
    match action {
        ConfigAction::Show => {
            let settings = manager.load_settings()?;
            println!("{}", format_settings(&manager.config_path(), &settings));
            Ok(())
        }
        ConfigAction::Set { base_url, timeout } => {
            let changes = Settings {
                base_url,
                timeout_secs: timeout,
                ..overrides.settings()
            };
            let saved = apply_changes(&manager, changes)?;
            println!(
                "Settings saved to {}",
                manager.config_path().display()
            );
            println!("{}", format_settings(&manager.config_path(), &saved));
            Ok(())
        }
    }
}

/// Merges `changes` over the stored settings and writes the result
fn apply_changes(manager: &ConfigManager, changes: Settings) -> Result<Settings, CliError> {
    if changes.api_key.is_none()
        && changes.server_id.is_none()
        && changes.base_url.is_none()
        && changes.timeout_secs.is_none()
    {
        return Err(CliError::Config(
            "Nothing to set; pass --api-key, --srv-id, --base-url or --timeout".to_string(),
        ));
    }
    if changes.timeout_secs == Some(0) {
        return Err(CliError::Config("Timeout must be at least 1 second".to_string()));
    }

    let merged = changes.or(manager.load_settings()?);
    manager.save_settings(&merged)?;
    Ok(merged)
}

/// Format settings for display; the API key is masked
#[must_use]
pub fn format_settings(path: &Path, settings: &Settings) -> String {
    format_details(
        "Configuration",
        &[
            ("File", path.display().to_string()),
            ("API key", or_dash(settings.masked_api_key().as_deref())),
            ("Server ID", or_dash(settings.server_id.as_deref())),
            ("Base URL", settings.base_url().to_string()),
            ("Timeout", format!("{}s", settings.timeout().as_secs())),
        ],
    )
}
