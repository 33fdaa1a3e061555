use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::db::CredentialMode;
use crate::error::{OutlayError, Result};
use crate::store::StoreConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    #[serde(default = "default_db_name")]
    pub db_name: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_db_name() -> String {
    "outlay.db".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            db_name: default_db_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("outlay")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("outlay")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| OutlayError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// The store configuration for the current settings. The database key, when
/// one is in use, comes from the OUTLAY_DB_KEY environment variable and is
/// never written to the settings file.
pub fn store_config() -> StoreConfig {
    let settings = load_settings();
    StoreConfig {
        data_dir: PathBuf::from(&settings.data_dir),
        db_name: settings.db_name,
        credentials: credentials_from(std::env::var("OUTLAY_DB_KEY").ok()),
        busy_timeout: Duration::from_secs(settings.timeout_secs),
    }
}

fn credentials_from(key: Option<String>) -> CredentialMode {
    match key {
        Some(k) if !k.is_empty() => CredentialMode::Passphrase(k),
        _ => CredentialMode::Trusted,
    }
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}
