//! Application configuration.
//!
//! Sources are layered in this order, later ones winning:
//! 1. Built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. Environment variables prefixed `PEMESANAN__`, e.g. `PEMESANAN__STORAGE_DIR`

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use store_actor::ActorSettings;
use thiserror::Error;
use tracing::{error, info};
use validator::Validate;

const CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "PEMESANAN";

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    /// Directory holding the storage files.
    pub storage_dir: PathBuf,
    /// Key the whole order collection is stored under.
    #[validate(length(min = 1))]
    pub storage_key: String,
    /// Where CSV exports are written.
    pub export_dir: PathBuf,
    /// Pause before the store reports itself loaded.
    pub loading_delay_ms: u64,
    #[validate(range(min = 1, max = 4096))]
    pub channel_capacity: usize,
    /// Actor recorded on admin decisions.
    #[validate(length(min = 1))]
    pub admin_label: String,
}

impl AppConfig {
    pub fn actor_settings(&self) -> ActorSettings {
        ActorSettings::new(self.storage_key.clone())
            .with_buffer_size(self.channel_capacity)
            .with_loading_delay(Duration::from_millis(self.loading_delay_ms))
    }
}

/// Loads configuration from `./config` and the environment.
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }
    load_config_from(Path::new(CONFIG_DIR))
}

/// Loads configuration using `config_dir` for the optional `default` file.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, AppConfigError> {
    let default_file = config_dir.join("default");
    let config = Config::builder()
        .set_default("storage_dir", "data")?
        .set_default("storage_key", "pemesanan_data")?
        .set_default("export_dir", "exports")?
        .set_default("loading_delay_ms", 0)?
        .set_default("channel_capacity", 32)?
        .set_default("admin_label", "Admin")?
        .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!(storage_dir = %app_config.storage_dir.display(), key = %app_config.storage_key, "Configuration loaded");
    Ok(app_config)
}
