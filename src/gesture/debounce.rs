//! Cooldown gate between emitted actions.
//!
//! A held gesture is seen on every frame; the debouncer lets the first one
//! through and swallows the rest until the cooldown has elapsed. Timestamps
//! are monotonic offsets from the start of the session, supplied by the
//! caller, so tests drive the gate with a hand-written clock.

use std::time::Duration;

use super::mapper::Action;

pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1500);

/// Whether the next non-None action would be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncePhase {
    Ready,
    Cooling,
}

/// Last emission time and the cooldown that applies to every action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceState {
    last_emission: Option<Duration>,
    cooldown: Duration,
}

impl DebounceState {
    /// Fresh state with no prior emission; the first action goes through.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            last_emission: None,
            cooldown,
        }
    }

    pub fn last_emission(&self) -> Option<Duration> {
        self.last_emission
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn phase(&self, now: Duration) -> DebouncePhase {
        match self.last_emission {
            None => DebouncePhase::Ready,
            // A clock that went backwards reads as zero elapsed time.
            Some(last) if now.saturating_sub(last) > self.cooldown => DebouncePhase::Ready,
            Some(_) => DebouncePhase::Cooling,
        }
    }
}

impl Default for DebounceState {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

/// Decides whether `action` may be emitted at `now`.
///
/// Returns `true` and records `now` as the last emission only for a non-None
/// action arriving strictly more than one cooldown after the previous
/// emission. A tie is suppressed. `Action::None` never touches the state.
pub fn should_emit(action: Action, now: Duration, state: &mut DebounceState) -> bool {
    if action.is_none() {
        return false;
    }

    match state.phase(now) {
        DebouncePhase::Ready => {
            state.last_emission = Some(now);
            true
        }
        DebouncePhase::Cooling => false,
    }
}

/// Owns a [`DebounceState`] for the frame loop.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    state: DebounceState,
}

impl Debouncer {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            state: DebounceState::new(cooldown),
        }
    }

    pub fn should_emit(&mut self, action: Action, now: Duration) -> bool {
        should_emit(action, now, &mut self.state)
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: f64) -> Duration {
        Duration::from_secs_f64(value)
    }

    #[test]
    fn first_action_is_emitted_immediately() {
        let mut state = DebounceState::default();
        assert!(should_emit(Action::NextSlide, secs(0.0), &mut state));
        assert_eq!(state.last_emission(), Some(secs(0.0)));
    }

    #[test]
    fn emits_suppresses_then_emits_again() {
        let mut state = DebounceState::new(secs(1.5));
        let results: Vec<bool> = [0.0, 1.0, 1.6]
            .into_iter()
            .map(|t| should_emit(Action::NextSlide, secs(t), &mut state))
            .collect();
        assert_eq!(results, vec![true, false, true]);
        assert_eq!(state.last_emission(), Some(secs(1.6)));
    }

    #[test]
    fn exact_cooldown_does_not_emit() {
        let mut state = DebounceState::new(secs(1.5));
        assert!(should_emit(Action::PreviousSlide, secs(0.5), &mut state));
        assert!(!should_emit(Action::PreviousSlide, secs(2.0), &mut state));
        assert_eq!(state.last_emission(), Some(secs(0.5)));
        assert!(should_emit(Action::PreviousSlide, secs(2.001), &mut state));
    }

    #[test]
    fn suppressed_call_leaves_state_unchanged() {
        let mut state = DebounceState::new(secs(1.5));
        assert!(should_emit(Action::NextSlide, secs(3.0), &mut state));
        let before = state.clone();
        assert!(!should_emit(Action::StartShow, secs(4.0), &mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn none_never_emits_or_consumes_cooldown() {
        let mut state = DebounceState::new(secs(1.5));
        assert!(!should_emit(Action::None, secs(0.0), &mut state));
        assert_eq!(state.last_emission(), None);

        assert!(should_emit(Action::NextSlide, secs(0.1), &mut state));
        for t in [0.5, 1.0, 1.7] {
            assert!(!should_emit(Action::None, secs(t), &mut state));
        }
        assert_eq!(state.last_emission(), Some(secs(0.1)));
        assert!(should_emit(Action::NextSlide, secs(1.7), &mut state));
    }

    #[test]
    fn cooldown_is_shared_across_actions() {
        let mut debouncer = Debouncer::new(secs(1.5));
        assert!(debouncer.should_emit(Action::NextSlide, secs(0.0)));
        assert!(!debouncer.should_emit(Action::PreviousSlide, secs(0.2)));
        assert!(!debouncer.should_emit(Action::EndShow, secs(1.4)));
    }

    #[test]
    fn phase_follows_elapsed_time() {
        let mut debouncer = Debouncer::new(secs(1.5));
        assert_eq!(debouncer.state().phase(secs(0.0)), DebouncePhase::Ready);
        debouncer.should_emit(Action::BlankScreen, secs(1.0));
        assert_eq!(debouncer.state().phase(secs(2.0)), DebouncePhase::Cooling);
        assert_eq!(debouncer.state().phase(secs(2.6)), DebouncePhase::Ready);
    }

    #[test]
    fn clock_going_backwards_is_suppressed() {
        let mut state = DebounceState::new(secs(1.5));
        assert!(should_emit(Action::NextSlide, secs(10.0), &mut state));
        assert!(!should_emit(Action::NextSlide, secs(2.0), &mut state));
        assert_eq!(state.last_emission(), Some(secs(10.0)));
    }
}
