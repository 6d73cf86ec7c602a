//! Configuration enum types.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Finger-count lookup table.
///
/// Both profiles map one finger to the next slide and two to the previous
/// slide; the extended profile also assigns 0, 3, 4 and 5 fingers.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Next/previous slide only
    #[default]
    Basic,
    /// Adds end show (fist), start show (3), blank screen (4), first slide (5)
    Extended,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Profile::Basic),
            "extended" => Ok(Profile::Extended),
            other => Err(format!(
                "Unknown profile '{}', expected 'basic' or 'extended'",
                other
            )),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Basic => f.write_str("basic"),
            Profile::Extended => f.write_str("extended"),
        }
    }
}
