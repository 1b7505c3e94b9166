// SPDX-License-Identifier: MPL-2.0
//! This module handles the browser configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[browser]` - Initial layout, trigger label, action row
//! - `[slideshow]` - Interval and reschedule policy
//! - `[gestures]` - Swipe threshold and direction bindings
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `IMAGE_BROWSER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use image_browser::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod manifest;
pub mod paths;

pub use defaults::*;

use crate::browser::input::{SwipeAction, SwipeBindings};
use crate::browser::Layout;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when the settings file exists but cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// How a browser instance starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_layout: Option<Layout>,

    /// Label of the trigger button. Without one, an inline grid is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_label: Option<String>,

    #[serde(default = "default_show_actions", skip_serializing_if = "Option::is_none")]
    pub show_actions: Option<bool>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            initial_layout: Some(Layout::default()),
            trigger_label: None,
            show_actions: default_show_actions(),
        }
    }
}

/// Slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Seconds per image, clamped to 1..=10 when applied.
    #[serde(default = "default_interval_secs", skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u32>,

    /// Re-arm the pending wait as soon as the interval changes.
    #[serde(
        default = "default_reschedule_on_interval_change",
        skip_serializing_if = "Option::is_none"
    )]
    pub reschedule_on_interval_change: Option<bool>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            reschedule_on_interval_change: default_reschedule_on_interval_change(),
        }
    }
}

/// Touch gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GesturesConfig {
    /// Minimum swipe travel in logical pixels.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_left: Option<SwipeAction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_right: Option<SwipeAction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_up: Option<SwipeAction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_down: Option<SwipeAction>,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold_px(),
            swipe_left: None,
            swipe_right: None,
            swipe_up: None,
            swipe_down: None,
        }
    }
}

impl GesturesConfig {
    /// Bindings with unset directions filled from the defaults.
    #[must_use]
    pub fn bindings(&self) -> SwipeBindings {
        let defaults = SwipeBindings::default();
        SwipeBindings {
            left: self.swipe_left.unwrap_or(defaults.left),
            right: self.swipe_right.unwrap_or(defaults.right),
            up: self.swipe_up.unwrap_or(defaults.up),
            down: self.swipe_down.unwrap_or(defaults.down),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Browser configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub gestures: GesturesConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_show_actions() -> Option<bool> {
    Some(DEFAULT_SHOW_ACTIONS)
}

fn default_interval_secs() -> Option<u32> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_SECS)
}

fn default_reschedule_on_interval_change() -> Option<bool> {
    Some(DEFAULT_RESCHEDULE_ON_INTERVAL_CHANGE)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
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
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "falling back to default settings"
                    );
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            browser: BrowserConfig {
                initial_layout: Some(Layout::Grid),
                trigger_label: Some("Open gallery".to_string()),
                show_actions: Some(true),
            },
            slideshow: SlideshowConfig {
                interval_secs: Some(3),
                reschedule_on_interval_change: Some(true),
            },
            gestures: GesturesConfig {
                swipe_threshold_px: Some(24.0),
                swipe_left: Some(SwipeAction::Previous),
                ..GesturesConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
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
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[slideshow]\ninterval_secs = \"soon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[gestures]\nswipe_up = \"none\"\n").expect("failed to write config");

        let config = load_from_path(&path).expect("valid config");
        assert_eq!(config.slideshow.interval_secs, Some(DEFAULT_SLIDESHOW_INTERVAL_SECS));
        assert_eq!(config.gestures.swipe_threshold_px, Some(DEFAULT_SWIPE_THRESHOLD_PX));
        let bindings = config.gestures.bindings();
        assert_eq!(bindings.up, SwipeAction::None);
        assert_eq!(bindings.left, SwipeAction::Next);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.browser.initial_layout, Some(Layout::Slides));
        assert_eq!(config.browser.show_actions, Some(false));
        assert!(config.browser.trigger_label.is_none());
        assert_eq!(config.slideshow.interval_secs, Some(5));
        assert_eq!(config.slideshow.reschedule_on_interval_change, Some(false));
        assert_eq!(config.gestures.bindings(), SwipeBindings::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("en-US".to_string()));
    }
}
