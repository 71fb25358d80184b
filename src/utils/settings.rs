use crate::utils::{MessageKind, SettingsError, SupportedModel, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENDPOINT_ENV: &str = "MODAL_CHAT_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub default_model: SupportedModel,
    pub default_reply: MessageKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_model: SupportedModel::default(),
            default_reply: MessageKind::Text,
        }
    }
}

impl Settings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf, SettingsError> {
        let config_dir = if cfg!(any(target_os = "windows", target_os = "macos")) {
            // Windows: %APPDATA%\modal-chat, macOS: ~/Library/Application Support/modal-chat
            dirs::config_dir()
                .ok_or(SettingsError::NoConfigDir)?
                .join("modal-chat")
        } else {
            // Linux/Unix: $HOME/.modal-chat
            dirs::home_dir()
                .ok_or(SettingsError::NoConfigDir)?
                .join(".modal-chat")
        };

        Ok(config_dir)
    }

    pub fn settings_path() -> Result<PathBuf, SettingsError> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }

    /// Load settings from the config file, then apply the endpoint override from the environment.
    pub fn load() -> Result<Self, SettingsError> {
        let mut settings = Self::load_from(&Self::settings_path()?)?;
        settings.apply_endpoint_override(std::env::var(ENDPOINT_ENV).ok());
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn apply_endpoint_override(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
    }
}
