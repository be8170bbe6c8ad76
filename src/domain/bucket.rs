//! Mood intensity classification

use crate::domain::MoodEntry;

/// Intensity tier of a mood reading. The tri-partition is fixed:
/// high is strictly above +5, low strictly below -5, everything
/// else (boundaries included) is neutral. Insight text depends on
/// exact bucket membership, so the boundaries must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodBucket {
    High,
    Neutral,
    Low,
}

impl MoodBucket {
    /// Classify a mood value. Pure function of the value alone.
    pub fn classify(mood_value: i32) -> MoodBucket {
        if mood_value > 5 {
            MoodBucket::High
        } else if mood_value < -5 {
            MoodBucket::Low
        } else {
            MoodBucket::Neutral
        }
    }
}

/// Entries split by intensity tier, storage order preserved
/// within each bucket.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub high: Vec<MoodEntry>,
    pub neutral: Vec<MoodEntry>,
    pub low: Vec<MoodEntry>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.high.len() + self.neutral.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition entries into the three buckets. Complete and disjoint:
/// every entry lands in exactly one bucket.
pub fn partition(entries: &[MoodEntry]) -> Partition {
    let mut result = Partition::default();

    for entry in entries {
        match MoodBucket::classify(entry.mood_value) {
            MoodBucket::High => result.high.push(entry.clone()),
            MoodBucket::Neutral => result.neutral.push(entry.clone()),
            MoodBucket::Low => result.low.push(entry.clone()),
        }
    }

    result
}
