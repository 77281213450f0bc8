// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_drift::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.start_page = Some(1.5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedDrift";

/// Page the scene scrolls to on startup, in page units.
pub const DEFAULT_START_PAGE: f32 = 0.0;

/// Tick interval for the animation subscription, in milliseconds (~60 fps).
pub const TICK_INTERVAL_MS: u64 = 16;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Initial scroll position, in page units (0.0 to 2.0).
    #[serde(default)]
    pub start_page: Option<f32>,
    /// Skip spring interpolation and jump straight to targets.
    #[serde(default)]
    pub reduced_motion: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            start_page: Some(DEFAULT_START_PAGE),
            reduced_motion: Some(false),
        }
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
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
