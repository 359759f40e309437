//! Application configuration module
//!
//! Settings are stored with `confy` in the OS-specific config directory.
//! Missing fields fall back to their defaults, so older config files keep
//! loading after new settings are added.

use crate::constant::{APP_NAME, DEFAULT_DEBOUNCE_MS, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT};
use crate::diff::DiffEngine;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Save on a background thread, since it's synchronous IO
    pub fn save_in_background(&self) {
        let config = Self {
            settings: self.settings.clone(),
        };
        std::thread::spawn(move || {
            if let Err(e) = config.save() {
                tracing::error!("Failed to save settings: {}", e);
            }
        });
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Application theme, "light" or "dark"
    pub theme: String,

    /// Quiet period in milliseconds before typing triggers a rediff
    pub debounce_ms: u64,

    /// Height of one line in the rendered views
    pub line_height: f32,

    pub font_size: f32,

    /// Diff algorithm used to compare the versions
    pub engine: DiffEngine,

    /// Draw markers for spaces and tabs in the rendered views
    pub visible_whitespace: bool,
}

impl Settings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Line height never smaller than the font, or lines would overlap
    pub fn effective_line_height(&self) -> f32 {
        self.line_height.max(self.font_size)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            line_height: DEFAULT_LINE_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            engine: DiffEngine::default(),
            visible_whitespace: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.debounce(), Duration::from_millis(300));
        assert_eq!(settings.line_height, 18.0);
        assert_eq!(settings.engine, DiffEngine::Semantic);
        assert!(!settings.visible_whitespace);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "engine": "words", "debounce_ms": 50 }"#).unwrap();

        assert_eq!(settings.engine, DiffEngine::Words);
        assert_eq!(settings.debounce_ms, 50);
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.font_size, 14.0);
    }

    #[test]
    fn line_height_is_at_least_font_size() {
        let settings = Settings {
            line_height: 10.0,
            font_size: 14.0,
            ..Settings::default()
        };
        assert_eq!(settings.effective_line_height(), 14.0);
        assert_eq!(Settings::default().effective_line_height(), 18.0);
    }

    #[test]
    fn settings_survive_a_round_trip() {
        let settings = Settings {
            engine: DiffEngine::Lines,
            visible_whitespace: true,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
