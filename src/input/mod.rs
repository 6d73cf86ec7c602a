//! Keys and key chords.
//!
//! Gestures end up as key presses in the presentation application, and the
//! frame loop stops on a configured exit key. Both are described with the
//! types here so config strings are validated once, at load time.

pub mod events;
pub mod modifiers;

pub use events::Key;
pub use modifiers::KeyChord;
