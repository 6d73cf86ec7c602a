//! Dispatch error type.

use thiserror::Error;

use crate::gesture::Action;

/// Errors that can occur while delivering an action.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No key bound for action {0:?}")]
    Unbound(Action),

    #[error("Failed to launch key-injection command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Key-injection command '{program}' exited with {status}")]
    CommandFailed { program: String, status: String },
}
