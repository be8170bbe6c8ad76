//! Output formatting utilities

use crate::application::DayHistory;
use crate::domain::InsightReport;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Notes shown per bucket in the insight report
const NOTES_SHOWN: usize = 3;

/// Format a single day's mood timeline for display
pub fn format_day_history(history: &DayHistory) -> String {
    let mut output = format!("Mood for {}\n\n", history.date.format("%Y-%m-%d"));

    if history.entries.is_empty() {
        output.push_str("No mood entries for this date.\n");
    } else {
        for (i, entry) in history.entries.iter().enumerate() {
            let label = &history.series.labels[i];
            let value = history.series.values[i];
            if entry.notes.is_empty() {
                output.push_str(&format!("{}  {:+3}\n", label, value));
            } else {
                output.push_str(&format!("{}  {:+3}  {}\n", label, value, entry.notes));
            }
        }
    }

    if history.skipped > 0 {
        output.push_str(&format!(
            "\nWarning: skipped {} malformed record(s)\n",
            history.skipped
        ));
    }

    output
}

/// Format an insight report for display
pub fn format_insight_report(report: &InsightReport) -> String {
    let mut output = format!("Mood Insights (past {})\n\n", report.range.as_str());

    if report.entry_count == 0 {
        output.push_str(&format!(
            "No mood entries in the past {}.\n",
            report.range.as_str()
        ));
        return output;
    }

    output.push_str("Patterns:\n");
    output.push_str(&format!("  • Your mood is {}.\n", report.weekday_trend));
    output.push_str(&format!("  • You typically feel {}.\n", report.time_of_day_trend));
    output.push_str(&format!("  • Your mood stability is {}.\n", report.volatility));

    if !report.happiness_factors.is_empty() {
        output.push_str(&format!(
            "\nWhat makes you happy: {}\n",
            report.happiness_factors.join(", ")
        ));
    }
    if !report.sadness_factors.is_empty() {
        output.push_str(&format!(
            "What might cause lower moods: {}\n",
            report.sadness_factors.join(", ")
        ));
    }

    output.push_str("\nAverage mood by day:\n");
    for (label, avg) in WEEKDAY_LABELS.iter().zip(&report.weekday_averages) {
        match avg {
            Some(avg) => output.push_str(&format!("  {}  {:+.1}\n", label, avg)),
            None => output.push_str(&format!("  {}    --\n", label)),
        }
    }

    if !report.recommendations.is_empty() {
        output.push_str("\nRecommendations:\n");
        for rec in &report.recommendations {
            output.push_str(&format!("  • {}\n", rec));
        }
    }

    output.push_str("\nYour mood in your words:\n");
    output.push_str("  When you felt great:\n");
    output.push_str(&format_notes(&report.mood_notes.high, "high"));
    output.push_str("  When your mood was lower:\n");
    output.push_str(&format_notes(&report.mood_notes.low, "low"));

    output
}

fn format_notes(notes: &[String], tier: &str) -> String {
    if notes.is_empty() {
        return format!("    No {} mood entries with notes.\n", tier);
    }

    notes
        .iter()
        .take(NOTES_SHOWN)
        .map(|note| format!("    \"{}\"\n", note))
        .collect()
}
