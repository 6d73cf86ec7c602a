//! Symbolic key representation.

use std::fmt;

/// Key that can be injected into the presentation application or polled as
/// the exit key.
///
/// `Display` uses X keysym spelling so a key can be handed straight to tools
/// like `xdotool key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character key, stored lowercase
    Char(char),
    Escape,
    Return,
    Space,
    Tab,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key F1-F12
    F(u8),
}

impl Key {
    /// Parses a key name such as `"Right"`, `"F5"`, `"esc"` or `"b"`.
    ///
    /// Names are case-insensitive; single characters are lowercased.
    pub fn parse(name: &str) -> Result<Self, String> {
        let name = name.trim();
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Key::Char(c.to_ascii_lowercase()));
        }

        let lower = name.to_lowercase();
        let key = match lower.as_str() {
            "" => return Err("Empty key name".to_string()),
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "space" => Key::Space,
            "tab" => Key::Tab,
            "backspace" => Key::Backspace,
            "left" => Key::Left,
            "right" => Key::Right,
            "up" => Key::Up,
            "down" => Key::Down,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" | "page_up" | "prior" => Key::PageUp,
            "pagedown" | "page_down" | "next" => Key::PageDown,
            other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                Some(n @ 1..=12) => Key::F(n),
                _ => return Err(format!("Unknown key name: {}", name)),
            },
        };
        Ok(key)
    }

    /// Legacy terminal/ASCII key code, where one exists.
    pub fn code(self) -> Option<u32> {
        match self {
            Key::Escape => Some(27),
            Key::Return => Some(13),
            Key::Space => Some(32),
            Key::Tab => Some(9),
            Key::Backspace => Some(8),
            Key::Char(c) if c.is_ascii() => Some(c as u32),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Escape => f.write_str("Escape"),
            Key::Return => f.write_str("Return"),
            Key::Space => f.write_str("space"),
            Key::Tab => f.write_str("Tab"),
            Key::Backspace => f.write_str("BackSpace"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
            Key::Home => f.write_str("Home"),
            Key::End => f.write_str("End"),
            Key::PageUp => f.write_str("Prior"),
            Key::PageDown => f.write_str("Next"),
            Key::F(n) => write!(f, "F{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_keys_case_insensitively() {
        assert_eq!(Key::parse("Right").unwrap(), Key::Right);
        assert_eq!(Key::parse("ESC").unwrap(), Key::Escape);
        assert_eq!(Key::parse(" home ").unwrap(), Key::Home);
        assert_eq!(Key::parse("Prior").unwrap(), Key::PageUp);
    }

    #[test]
    fn parses_function_keys() {
        assert_eq!(Key::parse("F5").unwrap(), Key::F(5));
        assert_eq!(Key::parse("f12").unwrap(), Key::F(12));
        assert!(Key::parse("F13").is_err());
        assert!(Key::parse("F0").is_err());
    }

    #[test]
    fn single_characters_are_lowercased() {
        assert_eq!(Key::parse("B").unwrap(), Key::Char('b'));
        assert_eq!(Key::parse("+").unwrap(), Key::Char('+'));
    }

    #[test]
    fn rejects_unknown_and_empty_names() {
        assert!(Key::parse("").is_err());
        assert!(Key::parse("   ").is_err());
        assert!(Key::parse("Hyper").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for key in [Key::Space, Key::Backspace, Key::PageDown, Key::F(5), Key::Char('b')] {
            assert_eq!(Key::parse(&key.to_string()).unwrap(), key);
        }
    }

    #[test]
    fn escape_has_ascii_code() {
        assert_eq!(Key::Escape.code(), Some(27));
        assert_eq!(Key::Right.code(), None);
    }
}
