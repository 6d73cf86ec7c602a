//! Data types for the per-frame tracking loop.

use std::time::Duration;
use thiserror::Error;

use crate::gesture::{Action, FingerState, NormalizedLandmark};

/// One captured video frame.
///
/// `captured_at` is the monotonic offset from the start of the session at
/// which the source produced the frame; the debouncer uses it as "now".
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub sequence: u64,
    pub captured_at: Duration,
    pub width: u32,
    pub height: u32,
    /// Packed RGB pixels, row-major. Empty for sources that carry no image.
    pub pixels: Vec<u8>,
}

/// A hand reported by the pose estimator, in estimator order.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedHand {
    /// Normalized landmarks; the position in the list is the landmark id.
    pub landmarks: Vec<NormalizedLandmark>,
    /// Detection confidence (0.0 - 1.0).
    pub score: f32,
}

/// Errors from the frame source.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The device is gone for good; the loop stops.
    #[error("Capture device unavailable: {0}")]
    DeviceUnavailable(String),
}

/// Errors from the pose estimator. They cost a single frame, never the loop.
#[derive(Debug, Error)]
pub enum EstimationError {
    #[error("Pose estimation failed: {0}")]
    Failed(String),
}

/// What the gesture chain did with one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No valid hand; the debouncer was not consulted.
    NoHand,
    /// A hand was classified but mapped to no action.
    Idle { fingers: FingerState },
    /// The action was swallowed by the cooldown.
    Suppressed { action: Action, fingers: FingerState },
    /// The action passed the debouncer and was handed to the dispatcher.
    Emitted { action: Action, fingers: FingerState },
}

impl FrameOutcome {
    pub fn emitted_action(&self) -> Option<Action> {
        match self {
            FrameOutcome::Emitted { action, .. } => Some(*action),
            _ => None,
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured exit key was pressed.
    ExitKey,
    /// SIGINT/SIGTERM or another external quit request.
    QuitRequested,
    /// The source has no more frames.
    EndOfStream,
}

/// Counters reported when the loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopSummary {
    /// Frames handed to the pose estimator.
    pub frames: u64,
    /// Iterations where the source returned no frame.
    pub dropped_frames: u64,
    /// Frames with at least one valid hand.
    pub frames_with_hand: u64,
    pub emitted: u64,
    pub suppressed: u64,
    pub dispatch_failures: u64,
}
