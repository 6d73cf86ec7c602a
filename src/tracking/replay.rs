//! Playback of recorded landmark sessions.
//!
//! A recording is a JSON-lines file, one frame per line:
//! ```json
//! {"t": 0.0, "width": 640, "height": 480,
//!  "hands": [{"score": 0.92, "landmarks": [[0.51, 0.80], [0.49, 0.74]]}],
//!  "key": null, "dropped": false}
//! ```
//! `t` is seconds since the start of the session. `dropped: true` stands for
//! a failed camera read, and `key` for a key pressed while that frame was on
//! screen. Landmarks are normalized `[x, y]` (a trailing `z` is ignored).

use serde::Deserialize;
use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::config::DetectionConfig;
use crate::gesture::NormalizedLandmark;
use crate::input::Key;
use crate::tracking::sources::{FrameSource, PoseEstimator};
use crate::tracking::types::{CaptureError, DetectedHand, EstimationError, Frame};

/// Errors raised while loading a recording.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read recording: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: invalid JSON: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: {reason}")]
    Invalid { line: usize, reason: String },
}

#[derive(Debug, Deserialize)]
struct RecordedFrame {
    t: f64,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default)]
    hands: Vec<RecordedHand>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    dropped: bool,
}

#[derive(Debug, Deserialize)]
struct RecordedHand {
    #[serde(default = "default_score")]
    score: f32,
    landmarks: Vec<Vec<f32>>,
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

fn default_score() -> f32 {
    1.0
}

#[derive(Debug, Clone)]
struct ReplayFrame {
    sequence: u64,
    captured_at: Duration,
    width: u32,
    height: u32,
    key: Option<Key>,
    dropped: bool,
}

/// A parsed recording, ready to be split into a source and an estimator.
#[derive(Debug, Clone, Default)]
pub struct Recording {
    frames: Vec<ReplayFrame>,
    hands: HashMap<u64, Vec<DetectedHand>>,
}

impl Recording {
    /// Loads a recording from disk.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses JSON lines; blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ReplayError> {
        let mut recording = Recording::default();

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let record: RecordedFrame = serde_json::from_str(&line).map_err(|source| {
                ReplayError::Parse {
                    line: line_no,
                    source,
                }
            })?;
            recording.push(record, line_no)?;
        }

        log::debug!("Loaded recording with {} frames", recording.frames.len());
        Ok(recording)
    }

    fn push(&mut self, record: RecordedFrame, line: usize) -> Result<(), ReplayError> {
        let invalid = |reason: String| ReplayError::Invalid { line, reason };

        let captured_at = Duration::try_from_secs_f64(record.t).map_err(|_| {
            invalid(format!(
                "timestamp {} must be a non-negative number of seconds",
                record.t
            ))
        })?;

        let key = record
            .key
            .as_deref()
            .map(Key::parse)
            .transpose()
            .map_err(invalid)?;

        let mut hands = Vec::with_capacity(record.hands.len());
        for (hand_index, hand) in record.hands.into_iter().enumerate() {
            let mut landmarks = Vec::with_capacity(hand.landmarks.len());
            for coords in hand.landmarks {
                match coords.as_slice() {
                    [x, y, ..] => landmarks.push(NormalizedLandmark { x: *x, y: *y }),
                    _ => {
                        return Err(invalid(format!(
                            "hand {} has a landmark with fewer than 2 coordinates",
                            hand_index
                        )));
                    }
                }
            }
            hands.push(DetectedHand {
                landmarks,
                score: hand.score,
            });
        }

        let sequence = self.frames.len() as u64;
        if !hands.is_empty() {
            self.hands.insert(sequence, hands);
        }
        self.frames.push(ReplayFrame {
            sequence,
            captured_at,
            width: record.width,
            height: record.height,
            key,
            dropped: record.dropped,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Splits into the camera and pose-model stand-ins. The estimator drops
    /// hands scored below `min_detection_confidence`.
    pub fn into_parts(self, detection: &DetectionConfig) -> (ReplaySource, ReplayEstimator) {
        let source = ReplaySource {
            frames: self.frames.into(),
            pending_key: None,
        };
        let estimator = ReplayEstimator {
            hands: self.hands,
            min_detection_confidence: detection.min_detection_confidence,
        };
        (source, estimator)
    }
}

/// Replays recorded frames in file order.
#[derive(Debug)]
pub struct ReplaySource {
    frames: VecDeque<ReplayFrame>,
    pending_key: Option<Key>,
}

impl FrameSource for ReplaySource {
    fn capture(&mut self) -> Result<Option<Frame>, CaptureError> {
        let Some(next) = self.frames.pop_front() else {
            return Err(CaptureError::DeviceUnavailable(
                "recording has no more frames".to_string(),
            ));
        };

        self.pending_key = next.key;
        if next.dropped {
            return Ok(None);
        }

        Ok(Some(Frame {
            sequence: next.sequence,
            captured_at: next.captured_at,
            width: next.width,
            height: next.height,
            pixels: Vec::new(),
        }))
    }

    fn poll_key(&mut self) -> Option<Key> {
        self.pending_key.take()
    }

    fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Returns the hands recorded for each frame.
#[derive(Debug)]
pub struct ReplayEstimator {
    hands: HashMap<u64, Vec<DetectedHand>>,
    min_detection_confidence: f32,
}

impl PoseEstimator for ReplayEstimator {
    fn estimate(&mut self, frame: &Frame) -> Result<Vec<DetectedHand>, EstimationError> {
        let hands = self.hands.remove(&frame.sequence).unwrap_or_default();
        Ok(hands
            .into_iter()
            .filter(|hand| hand.score >= self.min_detection_confidence)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn landmarks_json(count: usize) -> String {
        let points: Vec<String> = (0..count).map(|_| "[0.5, 0.5, 0.0]".to_string()).collect();
        format!("[{}]", points.join(","))
    }

    fn parse(source: &str) -> Result<Recording, ReplayError> {
        Recording::from_reader(Cursor::new(source.to_string()))
    }

    #[test]
    fn loads_frames_and_skips_blank_lines() {
        let source = format!(
            "{{\"t\": 0.0, \"hands\": [{{\"landmarks\": {}}}]}}\n\n{{\"t\": 0.5, \"dropped\": true}}\n",
            landmarks_json(21)
        );
        let recording = parse(&source).unwrap();
        assert_eq!(recording.len(), 2);
    }

    #[test]
    fn source_yields_frames_drops_and_keys() {
        let source = "{\"t\": 0.25, \"width\": 320, \"height\": 240}\n\
                      {\"t\": 0.5, \"dropped\": true, \"key\": \"q\"}\n";
        let (mut frames, _) = parse(source)
            .unwrap()
            .into_parts(&DetectionConfig::default());

        let first = frames.capture().unwrap().unwrap();
        assert_eq!(first.captured_at, Duration::from_millis(250));
        assert_eq!((first.width, first.height), (320, 240));
        assert_eq!(frames.poll_key(), None);

        assert!(frames.capture().unwrap().is_none());
        assert_eq!(frames.poll_key(), Some(Key::Char('q')));
        assert_eq!(frames.poll_key(), None);

        assert!(frames.is_exhausted());
        assert!(matches!(
            frames.capture(),
            Err(CaptureError::DeviceUnavailable(_))
        ));
    }

    #[test]
    fn estimator_filters_low_confidence_hands() {
        let source = format!(
            "{{\"t\": 0.0, \"hands\": [{{\"score\": 0.4, \"landmarks\": {lm}}}, {{\"score\": 0.9, \"landmarks\": {lm}}}]}}\n",
            lm = landmarks_json(21)
        );
        let (mut frames, mut estimator) = parse(&source)
            .unwrap()
            .into_parts(&DetectionConfig::default());

        let frame = frames.capture().unwrap().unwrap();
        let hands = estimator.estimate(&frame).unwrap();
        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].score, 0.9);
        assert_eq!(hands[0].landmarks.len(), 21);
    }

    #[test]
    fn reports_line_of_bad_json() {
        let err = parse("{\"t\": 0.0}\n{not json}\n").unwrap_err();
        assert!(matches!(err, ReplayError::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_negative_timestamp_and_bad_key() {
        assert!(matches!(
            parse("{\"t\": -1.0}").unwrap_err(),
            ReplayError::Invalid { line: 1, .. }
        ));
        assert!(matches!(
            parse("{\"t\": 1.0, \"key\": \"Hyper\"}").unwrap_err(),
            ReplayError::Invalid { line: 1, .. }
        ));
    }

    #[test]
    fn rejects_short_landmark_coordinates() {
        let err = parse("{\"t\": 0.0, \"hands\": [{\"landmarks\": [[0.5]]}]}").unwrap_err();
        assert!(err.to_string().contains("fewer than 2 coordinates"));
    }
}
