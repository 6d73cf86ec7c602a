//! Delivery of emitted actions to the presentation application.
//!
//! The gesture core never touches the OS; it hands each emitted [`Action`] to
//! an [`ActionDispatcher`]. Real key injection is delegated to an external
//! program ([`CommandDispatcher`]); [`LogDispatcher`] only reports.

pub mod command;
pub mod types;

pub use command::CommandDispatcher;
pub use types::DispatchError;

use std::io::Write;

use crate::config::KeyMap;
use crate::gesture::Action;

/// Receives actions that passed the debouncer.
pub trait ActionDispatcher {
    fn emit(&mut self, action: Action) -> Result<(), DispatchError>;
}

impl<D: ActionDispatcher + ?Sized> ActionDispatcher for Box<D> {
    fn emit(&mut self, action: Action) -> Result<(), DispatchError> {
        (**self).emit(action)
    }
}

/// Writes one line per action, `<label> -> <key chord>`, to a writer
/// (stdout by default).
pub struct LogDispatcher<W: Write = std::io::Stdout> {
    keys: KeyMap,
    out: W,
}

impl LogDispatcher {
    pub fn stdout(keys: KeyMap) -> Self {
        Self::new(keys, std::io::stdout())
    }
}

impl<W: Write> LogDispatcher<W> {
    pub fn new(keys: KeyMap, out: W) -> Self {
        Self { keys, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ActionDispatcher for LogDispatcher<W> {
    fn emit(&mut self, action: Action) -> Result<(), DispatchError> {
        let chord = self
            .keys
            .chord_for(action)
            .ok_or(DispatchError::Unbound(action))?;
        if let Err(e) = writeln!(self.out, "{} -> {}", action, chord) {
            log::warn!("Failed to write action line: {}", e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dispatcher_writes_label_and_chord() {
        let mut dispatcher = LogDispatcher::new(KeyMap::default(), Vec::new());
        dispatcher.emit(Action::NextSlide).unwrap();
        dispatcher.emit(Action::StartShow).unwrap();

        let out = String::from_utf8(dispatcher.into_inner()).unwrap();
        assert_eq!(out, "Next Slide -> Right\nStart Show -> F5\n");
    }

    #[test]
    fn log_dispatcher_rejects_none() {
        let mut dispatcher = LogDispatcher::new(KeyMap::default(), Vec::new());
        assert!(matches!(
            dispatcher.emit(Action::None),
            Err(DispatchError::Unbound(Action::None))
        ));
        assert!(dispatcher.into_inner().is_empty());
    }
}
