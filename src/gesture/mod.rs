//! Gesture recognition core.
//!
//! Turns one hand's landmarks into a [`FingerState`], maps the finger count to
//! an [`Action`] for the active profile, and gates emission through a
//! [`Debouncer`]. Everything here is pure except the debounce state.

pub mod classifier;
pub mod debounce;
pub mod landmarks;
pub mod mapper;

pub use classifier::{Finger, FingerState, classify};
pub use debounce::{DEFAULT_COOLDOWN, DebouncePhase, DebounceState, Debouncer, should_emit};
pub use landmarks::{HandPose, LandmarkPoint, NormalizedLandmark, PoseError};
pub use mapper::{Action, GestureMapper};
