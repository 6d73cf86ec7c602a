//! Key injection through an external program.

use log::debug;
use std::process::{Command, Stdio};

use super::ActionDispatcher;
use super::types::DispatchError;
use crate::config::KeyMap;
use crate::gesture::Action;

/// Placeholder replaced by the key chord in command arguments.
pub const KEY_PLACEHOLDER: &str = "{key}";

/// Runs a configured command (e.g. `xdotool key {key}`) once per action and
/// waits for it to finish.
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    program: String,
    args: Vec<String>,
    keys: KeyMap,
}

impl CommandDispatcher {
    /// Builds a dispatcher from `[program, args...]`. Returns `None` for an
    /// empty command.
    pub fn new(command: &[String], keys: KeyMap) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
            keys,
        })
    }

    /// Arguments for one invocation with the placeholder filled in.
    pub fn render_args(&self, key: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(KEY_PLACEHOLDER, key))
            .collect()
    }
}

impl ActionDispatcher for CommandDispatcher {
    fn emit(&mut self, action: Action) -> Result<(), DispatchError> {
        let chord = self
            .keys
            .chord_for(action)
            .ok_or(DispatchError::Unbound(action))?;
        let args = self.render_args(&chord.to_string());
        debug!("Running {} {:?}", self.program, args);

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|source| DispatchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DispatchError::CommandFailed {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_command_builds_nothing() {
        assert!(CommandDispatcher::new(&[], KeyMap::default()).is_none());
    }

    #[test]
    fn placeholder_is_replaced_in_every_argument() {
        let dispatcher = CommandDispatcher::new(
            &command(&["sh", "-c", "echo {key}", "--key={key}"]),
            KeyMap::default(),
        )
        .unwrap();
        assert_eq!(
            dispatcher.render_args("shift+F5"),
            vec!["-c", "echo shift+F5", "--key=shift+F5"]
        );
    }

    #[test]
    fn none_action_is_unbound() {
        let mut dispatcher =
            CommandDispatcher::new(&command(&["true"]), KeyMap::default()).unwrap();
        assert!(matches!(
            dispatcher.emit(Action::None),
            Err(DispatchError::Unbound(Action::None))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn successful_command_emits() {
        let mut dispatcher =
            CommandDispatcher::new(&command(&["true", "{key}"]), KeyMap::default()).unwrap();
        dispatcher.emit(Action::NextSlide).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_is_reported() {
        let mut dispatcher =
            CommandDispatcher::new(&command(&["false"]), KeyMap::default()).unwrap();
        assert!(matches!(
            dispatcher.emit(Action::PreviousSlide),
            Err(DispatchError::CommandFailed { .. })
        ));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let mut dispatcher = CommandDispatcher::new(
            &command(&["gesture-deck-no-such-program"]),
            KeyMap::default(),
        )
        .unwrap();
        assert!(matches!(
            dispatcher.emit(Action::NextSlide),
            Err(DispatchError::Spawn { .. })
        ));
    }
}
