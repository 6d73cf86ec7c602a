//! Finger extension classifier.

use std::fmt;

use super::landmarks::{
    HandPose, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP, THUMB_IP, THUMB_TIP,
};

/// Fingers in the order they appear in a [`FingerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Little,
    ];
}

/// Extended (`true`) or flexed (`false`) per finger, thumb first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerState([bool; 5]);

impl FingerState {
    pub fn new(fingers: [bool; 5]) -> Self {
        Self(fingers)
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.0[finger as usize]
    }

    /// Number of extended fingers, 0-5.
    pub fn count(&self) -> u8 {
        self.0.iter().filter(|extended| **extended).count() as u8
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }
}

impl fmt::Display for FingerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, extended) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", u8::from(*extended))?;
        }
        write!(f, "]")
    }
}

/// Tip and reference joint for the four long fingers.
const LONG_FINGERS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Classifies which fingers of `pose` are extended.
///
/// The thumb counts as extended when its tip lies to the right of the
/// interphalangeal joint. That only holds for a right hand in a horizontally
/// mirrored (selfie) frame; a left hand or an unmirrored feed reads inverted.
///
/// A long finger is extended when its tip is strictly above (smaller `y`) the
/// PIP joint two landmarks down the chain.
pub fn classify(pose: &HandPose) -> FingerState {
    let mut fingers = [false; 5];

    fingers[Finger::Thumb as usize] = pose.point(THUMB_TIP).x > pose.point(THUMB_IP).x;

    for (slot, (tip, joint)) in fingers[1..].iter_mut().zip(LONG_FINGERS) {
        *slot = pose.point(tip).y < pose.point(joint).y;
    }

    FingerState(fingers)
}
