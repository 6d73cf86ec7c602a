use log::{debug, info, warn};
use std::time::Duration;

use crate::dispatch::{ActionDispatcher, DispatchError};
use crate::gesture::{Debouncer, GestureMapper, HandPose, classify};
use crate::tracking::types::{DetectedHand, FrameOutcome};

/// Runs the gesture chain for one frame and owns the only cross-frame state,
/// the debouncer.
pub struct GestureController<D: ActionDispatcher> {
    mapper: GestureMapper,
    debouncer: Debouncer,
    dispatcher: D,
    last_dispatch_error: Option<DispatchError>,
}

impl<D: ActionDispatcher> GestureController<D> {
    pub fn new(mapper: GestureMapper, debouncer: Debouncer, dispatcher: D) -> Self {
        Self {
            mapper,
            debouncer,
            dispatcher,
            last_dispatch_error: None,
        }
    }

    /// Classifies the first well-formed hand in `hands` and emits its action
    /// if the cooldown allows.
    ///
    /// Hands with a malformed landmark set are skipped as if not detected.
    /// Further hands are ignored; there is no arbitration between two hands.
    pub fn process(
        &mut self,
        hands: &[DetectedHand],
        width: u32,
        height: u32,
        now: Duration,
    ) -> FrameOutcome {
        let Some(pose) = first_valid_pose(hands, width, height) else {
            return FrameOutcome::NoHand;
        };

        let fingers = classify(&pose);
        let action = self.mapper.map(&fingers);

        if action.is_none() {
            return FrameOutcome::Idle { fingers };
        }

        if !self.debouncer.should_emit(action, now) {
            debug!("Suppressed {} during cooldown (count {})", action, fingers.count());
            return FrameOutcome::Suppressed { action, fingers };
        }

        info!("Action: {} (count {}, fingers {})", action, fingers.count(), fingers);
        if let Err(e) = self.dispatcher.emit(action) {
            warn!("Failed to dispatch {}: {}", action, e);
            self.last_dispatch_error = Some(e);
        }

        FrameOutcome::Emitted { action, fingers }
    }

    /// Takes the error from the most recent failed dispatch, if any.
    pub fn take_dispatch_error(&mut self) -> Option<DispatchError> {
        self.last_dispatch_error.take()
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}

fn first_valid_pose(hands: &[DetectedHand], width: u32, height: u32) -> Option<HandPose> {
    hands.iter().enumerate().find_map(|(i, hand)| {
        match HandPose::from_normalized(&hand.landmarks, width, height) {
            Ok(pose) => Some(pose),
            Err(e) => {
                debug!("Skipping hand {}: {}", i, e);
                None
            }
        }
    })
}
