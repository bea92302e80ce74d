use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://api.app.shortcut.com/api/v3";
const BASE_URL_ENV: &str = "DE_SHORTCUT_BASE_URL";

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub keyring: KeyringConfig,
    pub shortcut: ShortcutConfig,
}

/// Where the Shortcut API key lives in the OS keychain.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeyringConfig {
    pub service: String,
    pub account: String,
}

impl Default for KeyringConfig {
    fn default() -> Self {
        Self {
            service: "declitool".into(),
            account: "shortcut".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub base_url: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".de")
}

fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let mut config = load_config_from(&config_path())?;
    if let Ok(url) = std::env::var(BASE_URL_ENV) {
        config.shortcut.base_url = url;
    }
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}
