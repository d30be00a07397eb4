//! Configuration management for `mikctl`
//!
//! Settings live in a single TOML file. Values given on the command line or
//! through the environment take precedence over it; see [`Settings::or`].

mod manager;
mod settings;

pub use manager::{CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigManager};
pub use settings::Settings;
