// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: reading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language and theme mode
//! - `[server]` - Translation server location
//! - `[languages]` - Pick list selections applied after the catalog loads
//! - `[upload]` - Client-side upload limits
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `ICED_TRANSLATOR_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! The file is edited by hand; the application only reads it.
//!
//! # Examples
//!
//! ```no_run
//! use iced_translator::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("server: {}", config.server.base_url);
//! }
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
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
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

/// Translation server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL the `/api/...` paths are resolved against.
    #[serde(default = "default_server_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_server_url(),
        }
    }
}

/// Initial language selections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguagesConfig {
    #[serde(default = "default_source_lang")]
    pub default_source: String,

    #[serde(default = "default_target_lang")]
    pub default_target: String,
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            default_source: default_source_lang(),
            default_target: default_target_lang(),
        }
    }
}

/// Client-side upload checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Largest file accepted by the upload zones, in megabytes.
    #[serde(default = "default_max_file_mb", skip_serializing_if = "Option::is_none")]
    pub max_file_mb: Option<u32>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_mb: default_max_file_mb(),
        }
    }
}

impl UploadConfig {
    /// Effective limit in bytes, clamped to the supported range.
    #[must_use]
    pub fn max_file_bytes(&self) -> u64 {
        let mb = self
            .max_file_mb
            .unwrap_or(DEFAULT_MAX_FILE_MB)
            .clamp(MIN_MAX_FILE_MB, MAX_MAX_FILE_MB);
        u64::from(mb) * 1024 * 1024
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub languages: LanguagesConfig,

    #[serde(default)]
    pub upload: UploadConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_source_lang() -> String {
    DEFAULT_SOURCE_LANG.to_string()
}

fn default_target_lang() -> String {
    DEFAULT_TARGET_LANG.to_string()
}

fn default_max_file_mb() -> Option<u32> {
    Some(DEFAULT_MAX_FILE_MB)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn serialized_settings_load_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            server: ServerConfig {
                base_url: "http://10.0.0.2:9000".to_string(),
            },
            languages: LanguagesConfig {
                default_source: "en".to_string(),
                default_target: "ja".to_string(),
            },
            upload: UploadConfig {
                max_file_mb: Some(20),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        fs::create_dir_all(config_path.parent().expect("has parent")).expect("failed to create dir");
        let content = toml::to_string_pretty(&config).expect("failed to serialize config");
        fs::write(&config_path, content).expect("failed to write config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[server]\nbase_url = \"http://example:1\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("config should load");
        assert_eq!(loaded.server.base_url, "http://example:1");
        assert_eq!(loaded.languages.default_source, DEFAULT_SOURCE_LANG);
        assert_eq!(loaded.languages.default_target, DEFAULT_TARGET_LANG);
        assert_eq!(loaded.upload.max_file_mb, Some(DEFAULT_MAX_FILE_MB));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"neon\"\n")
            .expect("failed to write config");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn max_file_bytes_is_clamped() {
        let upload = UploadConfig {
            max_file_mb: Some(0),
        };
        assert_eq!(upload.max_file_bytes(), u64::from(MIN_MAX_FILE_MB) * 1024 * 1024);

        let upload = UploadConfig { max_file_mb: None };
        assert_eq!(upload.max_file_bytes(), 50 * 1024 * 1024);
    }
}
