//! Hand landmark data model.
//!
//! Landmarks follow the standard 21-point hand skeleton: the wrist, then four
//! joints per finger from the palm outwards, thumb first.

use thiserror::Error;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Errors raised while building a [`HandPose`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseError {
    #[error("Invalid pose: expected {LANDMARK_COUNT} landmarks, got {0}")]
    WrongLandmarkCount(usize),

    #[error("Invalid pose: landmark id {0} is out of range 0-20")]
    IdOutOfRange(u8),

    #[error("Invalid pose: landmark id {0} appears more than once")]
    DuplicateId(u8),
}

/// A single landmark in pixel space of the frame it was detected in.
///
/// Image coordinates grow rightwards and downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LandmarkPoint {
    pub id: u8,
    pub x: i32,
    pub y: i32,
}

impl LandmarkPoint {
    pub fn new(id: u8, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }
}

/// Landmark as produced by a pose estimator, normalized to `[0, 1]` of the
/// frame width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
}

impl NormalizedLandmark {
    /// Projects onto a `width` x `height` frame, truncating toward zero.
    pub fn to_pixels(self, id: u8, width: u32, height: u32) -> LandmarkPoint {
        LandmarkPoint {
            id,
            x: (self.x * width as f32) as i32,
            y: (self.y * height as f32) as i32,
        }
    }
}

/// One detected hand: exactly 21 landmarks, one per anatomical id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandPose {
    points: [LandmarkPoint; LANDMARK_COUNT],
}

impl HandPose {
    /// Builds a pose from pixel landmarks in any order.
    ///
    /// Every id in `0..=20` must be present exactly once; anything else is
    /// rejected so a partial hand can never be classified.
    pub fn from_points(points: &[LandmarkPoint]) -> Result<Self, PoseError> {
        if points.len() != LANDMARK_COUNT {
            return Err(PoseError::WrongLandmarkCount(points.len()));
        }

        let mut slots: [Option<LandmarkPoint>; LANDMARK_COUNT] = [None; LANDMARK_COUNT];
        for point in points {
            let slot = slots
                .get_mut(point.id as usize)
                .ok_or(PoseError::IdOutOfRange(point.id))?;
            if slot.is_some() {
                return Err(PoseError::DuplicateId(point.id));
            }
            *slot = Some(*point);
        }

        // 21 points, all in range, no duplicates: every slot is filled.
        let mut ordered = [LandmarkPoint::default(); LANDMARK_COUNT];
        for (target, slot) in ordered.iter_mut().zip(slots) {
            if let Some(point) = slot {
                *target = point;
            }
        }

        Ok(Self { points: ordered })
    }

    /// Builds a pose from estimator output, where the landmark id is the
    /// position in `landmarks`.
    pub fn from_normalized(
        landmarks: &[NormalizedLandmark],
        width: u32,
        height: u32,
    ) -> Result<Self, PoseError> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(PoseError::WrongLandmarkCount(landmarks.len()));
        }

        let points: Vec<LandmarkPoint> = landmarks
            .iter()
            .enumerate()
            .map(|(id, lm)| lm.to_pixels(id as u8, width, height))
            .collect();
        Self::from_points(&points)
    }

    /// Returns the landmark with the given anatomical id.
    ///
    /// # Panics
    /// Panics if `id` is not below [`LANDMARK_COUNT`]; use the module
    /// constants.
    pub fn point(&self, id: usize) -> LandmarkPoint {
        self.points[id]
    }

    pub fn points(&self) -> &[LandmarkPoint; LANDMARK_COUNT] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_points() -> Vec<LandmarkPoint> {
        (0..LANDMARK_COUNT as u8)
            .map(|id| LandmarkPoint::new(id, id as i32 * 10, id as i32 * 5))
            .collect()
    }

    #[test]
    fn builds_pose_from_ordered_points() {
        let pose = HandPose::from_points(&sequential_points()).unwrap();
        assert_eq!(pose.point(INDEX_TIP), LandmarkPoint::new(8, 80, 40));
        assert_eq!(pose.point(WRIST), LandmarkPoint::new(0, 0, 0));
    }

    #[test]
    fn reorders_points_by_id() {
        let mut points = sequential_points();
        points.reverse();
        let pose = HandPose::from_points(&points).unwrap();
        for (id, point) in pose.points().iter().enumerate() {
            assert_eq!(point.id as usize, id);
        }
    }

    #[test]
    fn rejects_short_pose() {
        let mut points = sequential_points();
        points.pop();
        assert_eq!(
            HandPose::from_points(&points),
            Err(PoseError::WrongLandmarkCount(20))
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut points = sequential_points();
        points[20] = LandmarkPoint::new(3, 0, 0);
        assert_eq!(
            HandPose::from_points(&points),
            Err(PoseError::DuplicateId(3))
        );
    }

    #[test]
    fn rejects_out_of_range_id() {
        let mut points = sequential_points();
        points[0] = LandmarkPoint::new(21, 0, 0);
        assert_eq!(
            HandPose::from_points(&points),
            Err(PoseError::IdOutOfRange(21))
        );
    }

    #[test]
    fn normalized_landmarks_truncate_to_pixels() {
        let landmarks = vec![NormalizedLandmark { x: 0.5, y: 0.999 }; LANDMARK_COUNT];
        let pose = HandPose::from_normalized(&landmarks, 641, 480).unwrap();
        let thumb = pose.point(THUMB_TIP);
        assert_eq!(thumb.id, 4);
        assert_eq!(thumb.x, 320);
        assert_eq!(thumb.y, 479);
    }

    #[test]
    fn normalized_pose_requires_all_landmarks() {
        let landmarks = vec![NormalizedLandmark::default(); 5];
        assert_eq!(
            HandPose::from_normalized(&landmarks, 640, 480),
            Err(PoseError::WrongLandmarkCount(5))
        );
    }
}
