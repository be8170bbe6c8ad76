//! Mood entry model and capture modes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bounds of the mood scale. Values are clamped into this range
/// before an entry is ever constructed.
pub const MOOD_MIN: i32 = -10;
pub const MOOD_MAX: i32 = 10;

/// How a mood reading was captured. Recorded as provenance only;
/// downstream analytics treat all modes identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// Average of a drawn mood curve over the waking day
    Timeline,
    /// A single discrete point chosen by the user
    Points,
    /// Slider reading taken at save time
    Realtime,
}

impl CaptureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMode::Timeline => "timeline",
            CaptureMode::Points => "points",
            CaptureMode::Realtime => "realtime",
        }
    }
}

impl FromStr for CaptureMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timeline" => Ok(CaptureMode::Timeline),
            "points" => Ok(CaptureMode::Points),
            "realtime" => Ok(CaptureMode::Realtime),
            _ => Err(format!(
                "Invalid mode: '{}'. Valid modes are: timeline, points, realtime",
                s
            )),
        }
    }
}

/// Raw capture input, tagged with its origin. Timeline carries the
/// precomputed curve average (how the average is sampled is the
/// caller's concern); the other two carry a direct reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureValue {
    Timeline(f64),
    Point(f64),
    Realtime(f64),
}

impl CaptureValue {
    pub fn raw(&self) -> f64 {
        match self {
            CaptureValue::Timeline(v) | CaptureValue::Point(v) | CaptureValue::Realtime(v) => *v,
        }
    }

    pub fn mode(&self) -> CaptureMode {
        match self {
            CaptureValue::Timeline(_) => CaptureMode::Timeline,
            CaptureValue::Point(_) => CaptureMode::Points,
            CaptureValue::Realtime(_) => CaptureMode::Realtime,
        }
    }
}

/// One recorded mood observation. Immutable once created; the store
/// only ever appends.
///
/// Serialized field names match the persisted layout:
/// `{"timestamp": "...", "moodValue": 4, "notes": "...", "mode": "points"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub timestamp: DateTime<Utc>,
    pub mood_value: i32,
    #[serde(default)]
    pub notes: String,
    pub mode: CaptureMode,
}

impl MoodEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        mood_value: i32,
        notes: String,
        mode: CaptureMode,
    ) -> Self {
        MoodEntry {
            timestamp,
            mood_value,
            notes,
            mode,
        }
    }
}
