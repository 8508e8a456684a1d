// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[browse]` - Student browse screen defaults
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ENGILEARN_CONFIG_DIR` (see [`crate::app::paths`])
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use engilearn::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Student browse screen defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowseConfig {
    /// Curriculum year preselected when the student dashboard opens (1-4).
    /// Out-of-range values fall back to the built-in default at startup.
    #[serde(
        default = "default_browse_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_year: Option<u8>,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_year: default_browse_year(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Student browse screen defaults.
    #[serde(default)]
    pub browse: BrowseConfig,
}

impl Config {
    /// Effective theme mode.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.general.theme_mode
    }
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Resolves the directory holding `settings.toml`.
fn config_dir() -> Option<PathBuf> {
    paths::get_app_config_dir()
}

fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the resolved location.
///
/// A missing file yields defaults silently; an unreadable or unparsable file
/// yields defaults plus the i18n key of a warning to surface to the user.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-warning".to_string()),
        ),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the resolved location, creating the config
/// directory if needed.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_system_theme_and_year_two() {
        let config = Config::default();
        assert_eq!(config.theme_mode(), ThemeMode::System);
        assert!(config.general.language.is_none());
        assert_eq!(config.browse.default_year, Some(DEFAULT_BROWSE_YEAR));
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: Config = toml::from_str("").expect("empty config should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_sections_fill_with_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n")
            .expect("partial config should parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.browse.default_year, Some(DEFAULT_BROWSE_YEAR));
    }

    #[test]
    fn serialized_config_roundtrips() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.browse.default_year = Some(3);

        let serialized = toml::to_string_pretty(&config).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("reparse");
        assert_eq!(parsed, config);
    }
}
