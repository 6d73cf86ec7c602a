use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::dispatch::ActionDispatcher;
use crate::input::Key;
use crate::tracking::controller::GestureController;
use crate::tracking::sources::{FrameSource, PoseEstimator};
use crate::tracking::types::{CaptureError, FrameOutcome, LoopSummary, StopReason};

/// Single-threaded capture → estimate → gesture loop.
///
/// Cancellation is checked once per iteration: the quit flag before capture,
/// the exit key after the frame has been handled.
pub struct FrameLoop {
    exit_key: Key,
    quit: Arc<AtomicBool>,
}

impl FrameLoop {
    pub fn new(exit_key: Key, quit: Arc<AtomicBool>) -> Self {
        Self { exit_key, quit }
    }

    pub fn run<S, E, D>(
        &self,
        source: &mut S,
        estimator: &mut E,
        controller: &mut GestureController<D>,
    ) -> Result<(StopReason, LoopSummary), CaptureError>
    where
        S: FrameSource + ?Sized,
        E: PoseEstimator + ?Sized,
        D: ActionDispatcher,
    {
        let mut summary = LoopSummary::default();

        let reason = loop {
            // Acquire pairs with the Release store in the signal thread.
            if self.quit.load(Ordering::Acquire) {
                info!("Quit requested - stopping gesture loop");
                break StopReason::QuitRequested;
            }

            if source.is_exhausted() {
                info!("Frame source exhausted");
                break StopReason::EndOfStream;
            }

            match source.capture()? {
                Some(frame) => {
                    summary.frames += 1;
                    let hands = match estimator.estimate(&frame) {
                        Ok(hands) => hands,
                        Err(e) => {
                            warn!("Frame {}: {}", frame.sequence, e);
                            Vec::new()
                        }
                    };

                    let outcome =
                        controller.process(&hands, frame.width, frame.height, frame.captured_at);
                    match outcome {
                        FrameOutcome::NoHand => {}
                        FrameOutcome::Idle { .. } => summary.frames_with_hand += 1,
                        FrameOutcome::Suppressed { .. } => {
                            summary.frames_with_hand += 1;
                            summary.suppressed += 1;
                        }
                        FrameOutcome::Emitted { .. } => {
                            summary.frames_with_hand += 1;
                            summary.emitted += 1;
                            if controller.take_dispatch_error().is_some() {
                                summary.dispatch_failures += 1;
                            }
                        }
                    }
                }
                None => {
                    debug!("Ignoring empty camera frame");
                    summary.dropped_frames += 1;
                }
            }

            if source.poll_key() == Some(self.exit_key) {
                info!("Exit key {} pressed", self.exit_key);
                break StopReason::ExitKey;
            }
        };

        info!(
            "Gesture loop stopped ({:?}): {} frames, {} emitted, {} suppressed",
            reason, summary.frames, summary.emitted, summary.suppressed
        );
        Ok((reason, summary))
    }
}
