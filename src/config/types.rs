//! Configuration type definitions.

use super::enums::Profile;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pose-estimation thresholds.
///
/// Handed to the hand-pose estimator untouched; the gesture core never reads
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectionConfig {
    /// Minimum confidence for a hand to count as detected (0.0 - 1.0)
    #[serde(default = "default_detection_confidence")]
    pub min_detection_confidence: f32,

    /// Minimum confidence to keep tracking a hand between frames (0.0 - 1.0)
    #[serde(default = "default_tracking_confidence")]
    pub min_tracking_confidence: f32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: default_detection_confidence(),
            min_tracking_confidence: default_tracking_confidence(),
        }
    }
}

/// Gesture interpretation settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GestureConfig {
    /// Finger-count table: "basic" (next/previous only) or "extended"
    #[serde(default)]
    pub profile: Profile,

    /// Minimum seconds between two emitted actions (valid range: 0.0 - 60.0).
    /// An action is emitted only once strictly more than this has elapsed.
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            cooldown_secs: default_cooldown_secs(),
        }
    }
}

/// Loop controls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ControlsConfig {
    /// Key that stops the gesture loop (e.g. "Escape", "Q")
    #[serde(default = "default_exit_key")]
    pub exit_key: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            exit_key: default_exit_key(),
        }
    }
}

/// How emitted actions reach the presentation application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DispatchConfig {
    /// External key-injection command, program first. Every `{key}` argument
    /// is replaced with the bound key chord, e.g. `["xdotool", "key", "{key}"]`.
    /// Empty means actions are only logged.
    #[serde(default)]
    pub command: Vec<String>,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_detection_confidence() -> f32 {
    0.7
}

fn default_tracking_confidence() -> f32 {
    0.7
}

fn default_cooldown_secs() -> f64 {
    1.5
}

pub(super) fn default_exit_key() -> String {
    "Escape".to_string()
}
