//! Configuration file support for gesture-deck.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/gesture-deck/config.toml`. Settings include pose-estimation
//! thresholds, the gesture profile and cooldown, the exit key, the key sent for each
//! action, and the external key-injection command.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::Profile;
pub use keybindings::{ActionKeysConfig, KeyMap};
pub use types::{ControlsConfig, DetectionConfig, DispatchConfig, GestureConfig};

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::input::Key;

const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [detection]
/// min_detection_confidence = 0.7
/// min_tracking_confidence = 0.7
///
/// [gesture]
/// profile = "extended"
/// cooldown_secs = 1.5
///
/// [controls]
/// exit_key = "Escape"
///
/// [keys]
/// start_show = "Shift+F5"
///
/// [dispatch]
/// command = ["xdotool", "key", "{key}"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pose-estimation thresholds
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Gesture profile and cooldown
    #[serde(default)]
    pub gesture: GestureConfig,

    /// Loop controls (exit key)
    #[serde(default)]
    pub controls: ControlsConfig,

    /// Key chord sent for each action
    #[serde(default)]
    pub keys: ActionKeysConfig,

    /// External key-injection command
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `min_detection_confidence`, `min_tracking_confidence`: 0.0 - 1.0
    /// - `cooldown_secs`: 0.0 - 60.0
    /// - `exit_key`: must name a key, falls back to "Escape"
    pub fn validate_and_clamp(&mut self) {
        if !(0.0..=1.0).contains(&self.detection.min_detection_confidence) {
            log::warn!(
                "Invalid min_detection_confidence {:.2}, clamping to 0.0-1.0 range",
                self.detection.min_detection_confidence
            );
            self.detection.min_detection_confidence =
                clamp_unit(self.detection.min_detection_confidence);
        }

        if !(0.0..=1.0).contains(&self.detection.min_tracking_confidence) {
            log::warn!(
                "Invalid min_tracking_confidence {:.2}, clamping to 0.0-1.0 range",
                self.detection.min_tracking_confidence
            );
            self.detection.min_tracking_confidence =
                clamp_unit(self.detection.min_tracking_confidence);
        }

        if !(0.0..=60.0).contains(&self.gesture.cooldown_secs) {
            log::warn!(
                "Invalid cooldown_secs {:.2}, clamping to 0.0-60.0 range",
                self.gesture.cooldown_secs
            );
            self.gesture.cooldown_secs = if self.gesture.cooldown_secs.is_nan() {
                0.0
            } else {
                self.gesture.cooldown_secs.clamp(0.0, 60.0)
            };
        }

        if let Err(e) = Key::parse(&self.controls.exit_key) {
            log::warn!(
                "Invalid exit_key '{}' ({}), falling back to 'Escape'",
                self.controls.exit_key,
                e
            );
            self.controls.exit_key = types::default_exit_key();
        }
    }

    /// Cooldown between emitted actions.
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs_f64(self.gesture.cooldown_secs)
    }

    /// The key that stops the loop. Falls back to Escape if the configured
    /// name does not parse.
    pub fn exit_key(&self) -> Key {
        Key::parse(&self.controls.exit_key).unwrap_or(Key::Escape)
    }

    /// Resolves the `[keys]` table.
    pub fn key_map(&self) -> Result<KeyMap> {
        self.keys
            .build_key_map()
            .map_err(|e| anyhow!("Invalid [keys] configuration: {}", e))
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/gesture-deck/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("gesture-deck");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, contains invalid TOML, or binds
    /// an invalid or duplicate key.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        // Surface key errors at load time rather than on the first gesture.
        config.key_map()?;
        config.validate_and_clamp();

        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        Ok(config)
    }

    /// Writes the documented example config to `path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists at `path` or it cannot be written.
    pub fn create_default_file(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(anyhow!("Config file already exists at {}", path.display()));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Created default config at {}", path.display());
        Ok(())
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
