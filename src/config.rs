use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::composer::DEFAULT_USER;
use crate::error::ConfigError;

pub const DEFAULT_THEME: &str = "light";

/// Persisted user preferences.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Viewer name, also the initial composer user
    pub user: String,
    /// "light" or "dark"
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

pub fn settings_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from("com", "chatroom", "chatroom-client").ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join("settings.json"))
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data)?;
    Ok(())
}

/// Load settings from the platform config dir, falling back to defaults.
pub fn load_settings() -> Settings {
    let loaded = settings_path().and_then(|path| {
        if path.exists() {
            load_settings_from(&path).map(Some)
        } else {
            Ok(None)
        }
    });
    match loaded {
        Ok(Some(settings)) => settings,
        Ok(None) => Settings::default(),
        Err(e) => {
            warn!(error = %e, "failed to load settings, using defaults");
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    save_settings_to(&settings_path()?, settings)
}
