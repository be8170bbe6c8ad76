//! Temporal filtering of mood entries

use crate::domain::MoodEntry;
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Trailing window used to scope insight analytics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Trailing 7 days
    #[default]
    Week,
    /// Trailing 30 days
    Month,
    /// Trailing 365 days
    Year,
}

impl RangePolicy {
    /// Number of trailing days the policy covers
    pub fn days(&self) -> i64 {
        match self {
            RangePolicy::Week => 7,
            RangePolicy::Month => 30,
            RangePolicy::Year => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangePolicy::Week => "week",
            RangePolicy::Month => "month",
            RangePolicy::Year => "year",
        }
    }
}

impl FromStr for RangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(RangePolicy::Week),
            "month" => Ok(RangePolicy::Month),
            "year" => Ok(RangePolicy::Year),
            _ => Err(format!(
                "Invalid range: '{}'. Valid ranges are: week, month, year",
                s
            )),
        }
    }
}

/// Select entries falling on the given local calendar day, sorted
/// ascending by timestamp. The sort is stable, so entries with equal
/// timestamps keep their storage order. Idempotent on its own output.
pub fn select_day(entries: &[MoodEntry], date: NaiveDate) -> Vec<MoodEntry> {
    let mut selected: Vec<MoodEntry> = entries
        .iter()
        .filter(|e| e.timestamp.with_timezone(&Local).date_naive() == date)
        .cloned()
        .collect();

    selected.sort_by_key(|e| e.timestamp);
    selected
}

/// Select entries with timestamp within the trailing `days` window
/// ending at `now` (inclusive lower bound). Storage order preserved.
pub fn select_range(entries: &[MoodEntry], now: DateTime<Utc>, days: i64) -> Vec<MoodEntry> {
    let start = now - Duration::days(days);

    entries
        .iter()
        .filter(|e| e.timestamp >= start)
        .cloned()
        .collect()
}
