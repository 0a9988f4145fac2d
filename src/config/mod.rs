// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification settings, including loading and saving
//! them to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use corner_toasts::config::{self, Config};
//! use corner_toasts::notifications::NotificationPosition;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.position = Some(NotificationPosition::BottomLeft);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::notifications::NotificationPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{DEFAULT_EXPIRATION, DEFAULT_MAX_ITEMS, MIN_MAX_ITEMS};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "CornerToasts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub position: Option<NotificationPosition>,
    #[serde(default)]
    pub max_items: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: Some(NotificationPosition::default()),
            max_items: Some(DEFAULT_MAX_ITEMS),
        }
    }
}

impl Config {
    /// Returns the configured position, falling back to the default corner.
    #[must_use]
    pub fn position(&self) -> NotificationPosition {
        self.position.unwrap_or_default()
    }

    /// Returns the configured visible cap, clamped to [`MIN_MAX_ITEMS`].
    #[must_use]
    pub fn max_items(&self) -> usize {
        self.max_items.unwrap_or(DEFAULT_MAX_ITEMS).max(MIN_MAX_ITEMS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "invalid notification settings, using defaults"
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
