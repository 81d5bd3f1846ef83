// marklet/src/config.rs
use crate::domain::error::DomainResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{instrument, trace};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Directory where persisted keys live, one JSON file per key
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

fn default_store_path() -> String {
    let store_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/marklet");

    store_dir.to_str().unwrap_or(".marklet").to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

// Load settings from the config file and environment variables
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    // Start with default settings
    let mut settings = Settings::default();

    let config_path = config_file
        .map(Path::to_path_buf)
        .or_else(|| dirs::home_dir().map(|p| p.join(".config/marklet/config.toml")));

    if let Some(path) = config_path {
        if path.exists() {
            trace!("Loading config from: {:?}", path);

            if let Ok(config_text) = std::fs::read_to_string(&path) {
                if let Ok(file_settings) = toml::from_str::<Settings>(&config_text) {
                    settings.store_path = file_settings.store_path;
                }
            }
        }
    }

    // Override with environment variables
    if let Ok(store_path) = std::env::var("MARKLET_STORE_PATH") {
        trace!("Using MARKLET_STORE_PATH from environment: {}", store_path);
        settings.store_path = store_path;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}
