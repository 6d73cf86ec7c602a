use crate::input::Key;
use crate::tracking::types::{CaptureError, DetectedHand, EstimationError, Frame};

/// Abstraction over the camera (or a recording standing in for one).
pub trait FrameSource {
    /// Blocks until the next frame is available.
    ///
    /// `Ok(None)` is an empty read; the loop skips the iteration and asks
    /// again. `Err` means the device is permanently gone.
    fn capture(&mut self) -> Result<Option<Frame>, CaptureError>;

    /// Key pressed since the last poll, if the source has a window or
    /// terminal to read keys from.
    fn poll_key(&mut self) -> Option<Key> {
        None
    }

    /// True once the source will never produce another frame.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Abstraction over the hand-pose model.
pub trait PoseEstimator {
    /// Returns zero or more hands found in `frame`.
    fn estimate(&mut self, frame: &Frame) -> Result<Vec<DetectedHand>, EstimationError>;
}
