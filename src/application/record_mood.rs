//! Record mood use case

use crate::domain::entry::{MOOD_MAX, MOOD_MIN};
use crate::domain::{CaptureValue, MoodEntry};
use crate::error::{GooddayError, Result};
use crate::infrastructure::EntryStore;
use chrono::Utc;

/// Service that validates capture input and appends the resulting entry
pub struct RecordMoodService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> RecordMoodService<S> {
    /// Create a new record service over the given store
    pub fn new(store: S) -> Self {
        RecordMoodService { store }
    }

    /// Construct an entry from the capture input and append it.
    ///
    /// Validation policy: a non-finite raw value is rejected and nothing
    /// is written; finite values are rounded to the nearest integer and
    /// clamped into [-10, 10]. Whitespace-only notes are stored as the
    /// empty string.
    pub fn execute(&self, capture: CaptureValue, notes: &str) -> Result<MoodEntry> {
        let mood_value = clamp_mood(capture.raw())?;

        let notes = if notes.trim().is_empty() {
            String::new()
        } else {
            notes.to_string()
        };

        let entry = MoodEntry::new(Utc::now(), mood_value, notes, capture.mode());
        self.store.append(&entry)?;

        Ok(entry)
    }
}

/// Round and clamp a raw mood reading into the storable range
fn clamp_mood(raw: f64) -> Result<i32> {
    if !raw.is_finite() {
        return Err(GooddayError::InvalidEntry(
            "mood value is not a finite number".to_string(),
        ));
    }

    Ok((raw.round() as i32).clamp(MOOD_MIN, MOOD_MAX))
}
