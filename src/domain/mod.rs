//! Domain layer - Mood entries and the analytics pipeline

pub mod bucket;
pub mod entry;
pub mod insight;
pub mod series;
pub mod window;

pub use bucket::{partition, MoodBucket, Partition};
pub use entry::{CaptureMode, CaptureValue, MoodEntry};
pub use insight::{summarize, InsightReport, MoodNotes};
pub use series::{to_chart_series, ChartSeries};
pub use window::{select_day, select_range, RangePolicy};
