// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[overlay]` - Auto-hide delay, fade duration and tick interval
//! - `[demo]` - Simulated player used by the demo application
//!
//! # Examples
//!
//! ```no_run
//! use overlay_controls::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.overlay.hide_delay_ms = Some(4_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::ui::{FadeDuration, HideDelay, TickInterval};
use crate::error::Result;
use crate::overlay::OverlaySettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Overlay timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Idle delay before the controls fade out.
    #[serde(default = "default_hide_delay_ms", skip_serializing_if = "Option::is_none")]
    pub hide_delay_ms: Option<u64>,

    /// Duration of one fade transition.
    #[serde(
        default = "default_fade_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_duration_ms: Option<u64>,

    /// Interval of animation ticks while a fade or hide is pending.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay_ms(),
            fade_duration_ms: default_fade_duration_ms(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl OverlayConfig {
    /// Converts the raw values into validated overlay settings.
    #[must_use]
    pub fn settings(&self) -> OverlaySettings {
        OverlaySettings {
            hide_delay: HideDelay::from_millis(
                self.hide_delay_ms.unwrap_or(DEFAULT_HIDE_DELAY_MS),
            ),
            fade_duration: FadeDuration::from_millis(
                self.fade_duration_ms.unwrap_or(DEFAULT_FADE_DURATION_MS),
            ),
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        TickInterval::from_millis(self.tick_interval_ms.unwrap_or(DEFAULT_TICK_INTERVAL_MS))
    }
}

/// Demo player settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    /// Length of the simulated source in seconds.
    #[serde(
        default = "default_demo_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_secs: Option<f64>,

    /// Start playing as soon as the source is loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_demo_duration_secs(),
            autoplay: Some(false),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub overlay: OverlayConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_HIDE_DELAY_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_fade_duration_ms() -> Option<u64> {
    Some(DEFAULT_FADE_DURATION_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_demo_duration_secs() -> Option<f64> {
    Some(DEFAULT_DEMO_DURATION_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
                    tracing::warn!(path = %path.display(), %err, "failed to load settings");
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            overlay: OverlayConfig {
                hide_delay_ms: Some(4_000),
                fade_duration_ms: Some(350),
                tick_interval_ms: Some(33),
            },
            demo: DemoConfig {
                duration_secs: Some(42.5),
                autoplay: Some(true),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[overlay]\nhide_delay_ms = 1000\n").expect("failed to write config");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.overlay.hide_delay_ms, Some(1_000));
        assert_eq!(loaded.overlay.fade_duration_ms, Some(DEFAULT_FADE_DURATION_MS));
        assert_eq!(loaded.demo, DemoConfig::default());
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let overlay = OverlayConfig {
            hide_delay_ms: Some(1),
            fade_duration_ms: Some(60_000),
            tick_interval_ms: Some(0),
        };
        let settings = overlay.settings();
        assert_eq!(settings.hide_delay.as_millis(), MIN_HIDE_DELAY_MS);
        assert_eq!(settings.fade_duration.as_millis(), MAX_FADE_DURATION_MS);
        assert_eq!(overlay.tick_interval().as_duration(), Duration::from_millis(8));
    }

    #[test]
    fn invalid_toml_reports_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[overlay\nhide_delay_ms = ").expect("failed to write config");

        let err = load_from_path(&path).expect_err("expected parse failure");
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(nested.clone())).expect("save");
        assert!(nested.join(CONFIG_FILE).exists());
    }
}
