//! Chart series projection

use crate::domain::MoodEntry;
use chrono::Local;

/// Parallel label/value sequences for a chart surface.
/// The vertical domain is always [-10, 10]; rendering is the
/// consumer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<i32>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Project an ordered entry sequence into a labeled time series.
/// Label i is the local HH:MM of entry i, value i its mood reading.
/// No interpolation or gap-filling: absent times are absent points.
pub fn to_chart_series(entries: &[MoodEntry]) -> ChartSeries {
    let labels = entries
        .iter()
        .map(|e| e.timestamp.with_timezone(&Local).format("%H:%M").to_string())
        .collect();
    let values = entries.iter().map(|e| e.mood_value).collect();

    ChartSeries { labels, values }
}
