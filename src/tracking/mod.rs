//! Frame-driven tracking loop.
//!
//! This module wires the external collaborators to the gesture core:
//! - [`FrameSource`] yields frames (a camera, or a [`replay::ReplaySource`])
//! - [`PoseEstimator`] finds hands in a frame
//! - [`GestureController`] classifies, maps, debounces and dispatches
//! - [`FrameLoop`] runs them in sequence until the exit key, a quit signal,
//!   or the end of the stream

pub mod controller;
pub mod frame_loop;
pub mod replay;
pub mod sources;
pub mod types;


pub use controller::GestureController;
pub use frame_loop::FrameLoop;
pub use replay::{Recording, ReplayError};
pub use sources::{FrameSource, PoseEstimator};
pub use types::{
    CaptureError, DetectedHand, EstimationError, Frame, FrameOutcome, LoopSummary, StopReason,
};
