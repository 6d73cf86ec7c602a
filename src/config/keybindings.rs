//! Action-to-key configuration.
//!
//! Each slide action is delivered to the presentation application as one key
//! chord. Users override the defaults in config.toml:
//! ```toml
//! [keys]
//! next_slide = "Page_Down"
//! start_show = "Shift+F5"
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::gesture::Action;
use crate::input::{Key, KeyChord};

/// Key chord sent for each action.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ActionKeysConfig {
    #[serde(default = "default_next_slide")]
    pub next_slide: String,

    #[serde(default = "default_previous_slide")]
    pub previous_slide: String,

    #[serde(default = "default_end_show")]
    pub end_show: String,

    #[serde(default = "default_start_show")]
    pub start_show: String,

    #[serde(default = "default_blank_screen")]
    pub blank_screen: String,

    #[serde(default = "default_go_to_first_slide")]
    pub go_to_first_slide: String,
}

impl Default for ActionKeysConfig {
    fn default() -> Self {
        Self {
            next_slide: default_next_slide(),
            previous_slide: default_previous_slide(),
            end_show: default_end_show(),
            start_show: default_start_show(),
            blank_screen: default_blank_screen(),
            go_to_first_slide: default_go_to_first_slide(),
        }
    }
}

/// Resolved action-to-chord table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    chords: HashMap<Action, KeyChord>,
}

impl KeyMap {
    pub fn chord_for(&self, action: Action) -> Option<KeyChord> {
        self.chords.get(&action).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        // The built-in bindings always parse and never collide.
        let chords = [
            (Action::NextSlide, Key::Right),
            (Action::PreviousSlide, Key::Left),
            (Action::EndShow, Key::Escape),
            (Action::StartShow, Key::F(5)),
            (Action::BlankScreen, Key::Char('b')),
            (Action::GoToFirstSlide, Key::Home),
        ]
        .into_iter()
        .map(|(action, key)| (action, KeyChord::plain(key)))
        .collect();
        Self { chords }
    }
}

impl ActionKeysConfig {
    /// Parse every binding into a [`KeyMap`].
    /// Returns an error if a chord is invalid or two actions share a chord.
    pub fn build_key_map(&self) -> Result<KeyMap, String> {
        let mut chords = HashMap::new();
        let mut owners: HashMap<KeyChord, Action> = HashMap::new();

        let bindings = [
            (Action::NextSlide, &self.next_slide),
            (Action::PreviousSlide, &self.previous_slide),
            (Action::EndShow, &self.end_show),
            (Action::StartShow, &self.start_show),
            (Action::BlankScreen, &self.blank_screen),
            (Action::GoToFirstSlide, &self.go_to_first_slide),
        ];

        for (action, binding_str) in bindings {
            let chord = KeyChord::parse(binding_str)
                .map_err(|e| format!("Invalid key for {:?}: {}", action, e))?;
            if let Some(existing_action) = owners.insert(chord, action) {
                return Err(format!(
                    "Duplicate key '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                ));
            }
            chords.insert(action, chord);
        }

        Ok(KeyMap { chords })
    }
}

// =============================================================================
// Default key functions (common presentation-software shortcuts)
// =============================================================================

fn default_next_slide() -> String {
    "Right".to_string()
}

fn default_previous_slide() -> String {
    "Left".to_string()
}

fn default_end_show() -> String {
    "Escape".to_string()
}

fn default_start_show() -> String {
    "F5".to_string()
}

fn default_blank_screen() -> String {
    "B".to_string()
}

fn default_go_to_first_slide() -> String {
    "Home".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_builtin_map() {
        let map = ActionKeysConfig::default().build_key_map().unwrap();
        assert_eq!(map, KeyMap::default());
        assert_eq!(
            map.chord_for(Action::NextSlide),
            Some(KeyChord::plain(Key::Right))
        );
    }

    #[test]
    fn none_action_has_no_chord() {
        let map = ActionKeysConfig::default().build_key_map().unwrap();
        assert_eq!(map.chord_for(Action::None), None);
    }

    #[test]
    fn custom_chord_with_modifiers() {
        let mut config = ActionKeysConfig::default();
        config.start_show = "Shift+F5".to_string();
        let map = config.build_key_map().unwrap();
        let chord = map.chord_for(Action::StartShow).unwrap();
        assert!(chord.shift);
        assert_eq!(chord.key, Key::F(5));
    }

    #[test]
    fn duplicate_key_detection() {
        let mut config = ActionKeysConfig::default();
        config.blank_screen = "Right".to_string();

        let err = config.build_key_map().unwrap_err();
        assert!(err.contains("Duplicate key"));
        assert!(err.contains("NextSlide"));
        assert!(err.contains("BlankScreen"));
    }

    #[test]
    fn duplicate_with_different_modifier_order() {
        let mut config = ActionKeysConfig::default();
        config.next_slide = "Ctrl+Shift+N".to_string();
        config.previous_slide = "Shift+Ctrl+n".to_string();

        let err = config.build_key_map().unwrap_err();
        assert!(err.contains("Duplicate key"));
    }

    #[test]
    fn invalid_key_names_the_action() {
        let mut config = ActionKeysConfig::default();
        config.end_show = "Ctrl+Nope".to_string();

        let err = config.build_key_map().unwrap_err();
        assert!(err.contains("EndShow"));
    }
}
