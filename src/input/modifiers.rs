//! Key chords: a key plus held modifiers.

use std::fmt;

use super::events::Key;

/// A key pressed with optional Ctrl/Shift/Alt modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    /// Parse a chord string like "Shift+F5" or "Right".
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty key chord".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]: the key is '+'.
        let joined = key_parts.join("+");
        let key = if joined.chars().all(|c| c == '+') {
            Key::Char('+')
        } else {
            Key::parse(&joined)?
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.shift {
            f.write_str("shift+")?;
        }
        if self.alt {
            f.write_str("alt+")?;
        }
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_key() {
        let chord = KeyChord::parse("Right").unwrap();
        assert_eq!(chord, KeyChord::plain(Key::Right));
    }

    #[test]
    fn parse_modifiers_in_any_order() {
        let a = KeyChord::parse("Ctrl+Shift+F5").unwrap();
        let b = KeyChord::parse("shift + ctrl + f5").unwrap();
        assert_eq!(a, b);
        assert!(a.ctrl && a.shift && !a.alt);
        assert_eq!(a.key, Key::F(5));
    }

    #[test]
    fn parse_plus_key() {
        let chord = KeyChord::parse("Ctrl++").unwrap();
        assert_eq!(chord.key, Key::Char('+'));
        assert!(chord.ctrl);
    }

    #[test]
    fn parse_rejects_modifier_only_and_unknown_keys() {
        assert!(KeyChord::parse("Ctrl+Shift").is_err());
        assert!(KeyChord::parse("").is_err());
        assert!(KeyChord::parse("Alt+Nope").is_err());
    }

    #[test]
    fn display_uses_lowercase_modifiers() {
        let chord = KeyChord::parse("Shift+F5").unwrap();
        assert_eq!(chord.to_string(), "shift+F5");
        assert_eq!(KeyChord::parse("B").unwrap().to_string(), "b");
    }
}
