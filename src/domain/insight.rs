//! Insight aggregation over a trailing window
//!
//! Derives trend summaries, factor lists, and categorized notes from the
//! windowed entry set. Every field is computed from the data; nothing is
//! hardcoded, so the report changes whenever the underlying window does.

use crate::domain::{partition, select_range, MoodEntry, RangePolicy};
use chrono::{DateTime, Datelike, Local, Timelike, Utc, Weekday};

/// Keyword vocabulary matched against notes of high-mood entries
const HAPPY_KEYWORDS: [&str; 5] = ["exercise", "friends", "outdoors", "success", "family"];

/// Keyword vocabulary matched against notes of low-mood entries
const SAD_KEYWORDS: [&str; 5] = ["stress", "work", "tired", "conflict", "lonely"];

/// Non-blank notes grouped by mood tier. The neutral bucket is exposed
/// under the external label `medium`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodNotes {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

/// Aggregated trend and note analysis for one trailing window
#[derive(Debug, Clone)]
pub struct InsightReport {
    pub range: RangePolicy,
    pub entry_count: usize,
    /// e.g. "somewhat better on weekends"
    pub weekday_trend: String,
    /// e.g. "best in the evening"
    pub time_of_day_trend: String,
    /// e.g. "moderately variable"
    pub volatility: String,
    pub happiness_factors: Vec<String>,
    pub sadness_factors: Vec<String>,
    /// Mean mood per weekday, Monday first; None when the window has
    /// no entries on that weekday
    pub weekday_averages: Vec<Option<f64>>,
    pub mood_notes: MoodNotes,
    pub recommendations: Vec<String>,
}

/// Summarize all entries over the trailing window ending at `now`.
/// Pure read-path function: (entries, policy, now) fully determine
/// the report.
pub fn summarize(entries: &[MoodEntry], range: RangePolicy, now: DateTime<Utc>) -> InsightReport {
    let mut windowed = select_range(entries, now, range.days());
    windowed.sort_by_key(|e| e.timestamp);

    let parts = partition(&windowed);
    let mood_notes = MoodNotes {
        high: collect_notes(&parts.high),
        medium: collect_notes(&parts.neutral),
        low: collect_notes(&parts.low),
    };

    let weekday_trend = weekday_trend(&windowed);
    let time_of_day_trend = time_of_day_trend(&windowed);
    let volatility = volatility(&windowed);
    let happiness_factors = top_factors(&parts.high, &HAPPY_KEYWORDS);
    let sadness_factors = top_factors(&parts.low, &SAD_KEYWORDS);
    let weekday_averages = weekday_averages(&windowed);
    let recommendations =
        recommendations(&weekday_trend, &happiness_factors, &sadness_factors);

    InsightReport {
        range,
        entry_count: windowed.len(),
        weekday_trend,
        time_of_day_trend,
        volatility,
        happiness_factors,
        sadness_factors,
        weekday_averages,
        mood_notes,
        recommendations,
    }
}

fn collect_notes(entries: &[MoodEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| !e.notes.trim().is_empty())
        .map(|e| e.notes.clone())
        .collect()
}

fn mean(values: impl Iterator<Item = i32>) -> Option<f64> {
    let values: Vec<i32> = values.collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|v| *v as f64).sum::<f64>() / values.len() as f64)
}

fn is_weekend(entry: &MoodEntry) -> bool {
    matches!(
        entry.timestamp.with_timezone(&Local).weekday(),
        Weekday::Sat | Weekday::Sun
    )
}

/// Weekend mean vs weekday mean, with 2.0 / 0.5 point thresholds.
/// When either side has no entries there is nothing to compare, so
/// the week reads as consistent.
fn weekday_trend(entries: &[MoodEntry]) -> String {
    let weekend = mean(entries.iter().filter(|e| is_weekend(e)).map(|e| e.mood_value));
    let weekday = mean(entries.iter().filter(|e| !is_weekend(e)).map(|e| e.mood_value));

    let (Some(weekend), Some(weekday)) = (weekend, weekday) else {
        return "consistent throughout the week".to_string();
    };

    let diff = weekend - weekday;
    if diff > 2.0 {
        "significantly better on weekends".to_string()
    } else if diff > 0.5 {
        "somewhat better on weekends".to_string()
    } else if diff < -2.0 {
        "significantly better on weekdays".to_string()
    } else if diff < -0.5 {
        "somewhat better on weekdays".to_string()
    } else {
        "consistent throughout the week".to_string()
    }
}

/// Mean mood for morning [6,12), afternoon [12,18) and evening [18,24)
/// local hours; the highest populated segment names the trend. Ties go
/// to the earlier segment.
fn time_of_day_trend(entries: &[MoodEntry]) -> String {
    let segment_mean = |lo: u32, hi: u32| {
        mean(
            entries
                .iter()
                .filter(|e| {
                    let hour = e.timestamp.with_timezone(&Local).hour();
                    hour >= lo && hour < hi
                })
                .map(|e| e.mood_value),
        )
    };

    let segments = [
        (segment_mean(6, 12), "best in the morning"),
        (segment_mean(12, 18), "best in the afternoon"),
        (segment_mean(18, 24), "best in the evening"),
    ];

    let mut best: Option<(f64, &str)> = None;
    for (avg, label) in segments {
        if let Some(avg) = avg {
            if best.is_none_or(|(b, _)| avg > b) {
                best = Some((avg, label));
            }
        }
    }

    match best {
        Some((_, label)) => label.to_string(),
        None => "about the same all day".to_string(),
    }
}

/// Mean absolute change between consecutive time-ordered readings.
/// Expects `entries` sorted ascending by timestamp.
fn volatility(entries: &[MoodEntry]) -> String {
    let avg_change = mean(
        entries
            .windows(2)
            .map(|pair| (pair[1].mood_value - pair[0].mood_value).abs()),
    );

    match avg_change {
        Some(c) if c > 4.0 => "highly variable".to_string(),
        Some(c) if c > 2.0 => "moderately variable".to_string(),
        _ => "relatively stable".to_string(),
    }
}

/// Count case-insensitive keyword occurrences across the bucket's notes
/// and keep the five most frequent. A note mentions a keyword at most
/// once; ties keep vocabulary order.
fn top_factors(entries: &[MoodEntry], vocabulary: &[&str]) -> Vec<String> {
    let mut counts: Vec<(usize, &str)> = vocabulary.iter().map(|k| (0usize, *k)).collect();

    for entry in entries {
        let note = entry.notes.to_lowercase();
        for (count, keyword) in counts.iter_mut() {
            if note.contains(*keyword) {
                *count += 1;
            }
        }
    }

    counts.sort_by(|a, b| b.0.cmp(&a.0));
    counts
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .take(5)
        .map(|(_, keyword)| keyword.to_string())
        .collect()
}

fn weekday_averages(entries: &[MoodEntry]) -> Vec<Option<f64>> {
    (0..7)
        .map(|day| {
            mean(
                entries
                    .iter()
                    .filter(|e| {
                        e.timestamp
                            .with_timezone(&Local)
                            .weekday()
                            .num_days_from_monday()
                            == day
                    })
                    .map(|e| e.mood_value),
            )
        })
        .collect()
}

fn recommendations(
    weekday_trend: &str,
    happiness_factors: &[String],
    sadness_factors: &[String],
) -> Vec<String> {
    let mut out = Vec::new();

    if weekday_trend == "significantly better on weekends" {
        out.push("Try to incorporate more weekend-like activities into your weekdays.".to_string());
    }
    if happiness_factors.iter().any(|f| f == "exercise") {
        out.push(
            "Regular exercise appears to boost your mood - consider making it a consistent part of your routine."
                .to_string(),
        );
    }
    if sadness_factors.iter().any(|f| f == "lonely") {
        out.push(
            "Consider scheduling regular social activities to combat feelings of loneliness."
                .to_string(),
        );
    }

    out
}
