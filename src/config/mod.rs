// SPDX-License-Identifier: MPL-2.0
//! User preferences persisted as `settings.toml` in the platform
//! configuration directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_atlas::config;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.language = Some("fr".to_string());
//! config::save(&config).expect("failed to save config");
//! ```
//!
//! [`load_from_path`] and [`save_to_path`] take explicit paths so tests can
//! run against a temporary directory.

use crate::error::Result;
use crate::map::tiles::DEFAULT_CACHE_TILES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAtlas";

/// Settings that survive between runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Preferred UI language, e.g. `"en-US"`. `None` defers to the OS locale.
    pub language: Option<String>,
    /// Tile cache capacity in tiles; clamped to a sane range on use.
    #[serde(default)]
    pub tile_cache_tiles: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            tile_cache_tiles: Some(DEFAULT_CACHE_TILES),
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

/// Loads settings from the default location, or defaults when absent.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves settings to the default location. A platform without a config
/// directory is a silent no-op.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a settings file. Unparsable TOML yields the default configuration.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Writes a settings file, creating parent directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            tile_cache_tiles: Some(512),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.tile_cache_tiles, config.tile_cache_tiles);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            language: Some("en-US".to_string()),
            tile_cache_tiles: Some(128),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_sets_tile_cache_size() {
        let config = Config::default();
        assert!(config.language.is_none());
        assert_eq!(config.tile_cache_tiles, Some(DEFAULT_CACHE_TILES));
    }
}
