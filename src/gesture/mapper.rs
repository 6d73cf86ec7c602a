//! Finger count to slide action lookup.

use std::fmt;

use super::classifier::FingerState;
use crate::config::Profile;

/// Slide-control command produced by a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// No command for this frame.
    None,
    NextSlide,
    PreviousSlide,
    EndShow,
    StartShow,
    BlankScreen,
    GoToFirstSlide,
}

impl Action {
    pub fn is_none(self) -> bool {
        self == Action::None
    }

    /// Human-readable name used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Action::None => "No Action",
            Action::NextSlide => "Next Slide",
            Action::PreviousSlide => "Previous Slide",
            Action::EndShow => "End Show",
            Action::StartShow => "Start Show",
            Action::BlankScreen => "Blank Screen",
            Action::GoToFirstSlide => "Go To First Slide",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps finger counts to actions for one profile.
///
/// Only the number of extended fingers matters; two hand shapes with the same
/// count always produce the same action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureMapper {
    profile: Profile,
}

impl GestureMapper {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn map(&self, state: &FingerState) -> Action {
        self.action_for_count(state.count())
    }

    pub fn action_for_count(&self, count: u8) -> Action {
        match (self.profile, count) {
            (_, 1) => Action::NextSlide,
            (_, 2) => Action::PreviousSlide,
            (Profile::Extended, 0) => Action::EndShow,
            (Profile::Extended, 3) => Action::StartShow,
            (Profile::Extended, 4) => Action::BlankScreen,
            (Profile::Extended, 5) => Action::GoToFirstSlide,
            _ => Action::None,
        }
    }
}
