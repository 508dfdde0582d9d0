// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Advance mode at the end of the story
//! - `[display]` - Caption visibility
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_STORIES_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::error::Result;
use crate::player::AdvanceMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "ICED_STORIES_CONFIG_DIR";
const APP_DIR: &str = "iced_stories";

/// What happens when the story advances past its last slide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackMode {
    /// Wrap to the first slide and keep playing.
    Loop,
    /// Close the viewer.
    #[default]
    SinglePass,
}

impl From<PlaybackMode> for AdvanceMode {
    fn from(mode: PlaybackMode) -> Self {
        match mode {
            PlaybackMode::Loop => AdvanceMode::Loop,
            PlaybackMode::SinglePass => AdvanceMode::SinglePass,
        }
    }
}

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlaybackConfig {
    /// Advance mode at the end of the story.
    #[serde(default)]
    pub mode: PlaybackMode,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Whether slide captions are drawn over the image.
    #[serde(default = "default_show_captions")]
    pub show_captions: bool,
}

fn default_show_captions() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_captions: default_show_captions(),
        }
    }
}

/// Root configuration value persisted to `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Returns the directory holding the config file.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Loads the configuration, falling back to defaults.
///
/// Never fails: a missing file yields defaults silently, while an
/// unreadable or unparsable file yields defaults plus a warning message
/// the caller can surface.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "Failed to load {}: {} (using defaults)",
                path.display(),
                err
            )),
        ),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    let Some(dir) = config_dir() else {
        return Ok(());
    };
    fs::create_dir_all(&dir)?;
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Saves the configuration to an explicit path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
