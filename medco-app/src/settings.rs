//! User settings persistence via TOML.
//!
//! Settings are stored at `<config_dir>/medco/settings.toml`.
//! Missing or corrupted config files return sensible defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display name used for the local identity.
    pub display_name: String,
    /// Root directory of the local document store.
    pub storage_dir: PathBuf,
    /// UI theme.
    pub theme: Theme,
}

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Settings {
    fn default() -> Self {
        let storage_dir = directories::ProjectDirs::from("", "", "medco")
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("medco-data"));

        Self {
            display_name: "User".to_string(),
            storage_dir,
            theme: Theme::Light,
        }
    }
}

impl Settings {
    /// Load settings from the default config path.
    ///
    /// Returns defaults if the file doesn't exist or is corrupted.
    pub fn load() -> Self {
        Self::load_from_dir(Self::config_dir())
    }

    /// Save settings to the default config path.
    pub fn save(&self) -> Result<()> {
        self.save_to_dir(Self::config_dir())
    }

    /// Load settings from a specific config directory.
    pub fn load_from_dir(config_dir: PathBuf) -> Self {
        let path = config_dir.join("settings.toml");
        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => {
                    tracing::info!(path = %path.display(), "settings loaded");
                    settings
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "corrupted settings file, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.display(),
                    "settings file not found, using defaults"
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read settings file, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Save settings to a specific config directory.
    pub fn save_to_dir(&self, config_dir: PathBuf) -> Result<()> {
        std::fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "failed to create config directory: {}",
                config_dir.display()
            )
        })?;

        let path = config_dir.join("settings.toml");
        let contents = toml::to_string_pretty(self).context("failed to serialize settings")?;
        std::fs::write(&path, &contents)
            .with_context(|| format!("failed to write settings file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Get the default config directory.
    fn config_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "medco")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("medco-config"))
    }
}
