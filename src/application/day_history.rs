//! Per-day history use case

use crate::domain::{select_day, to_chart_series, ChartSeries, MoodEntry};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;

/// Chart series and annotated entries for one local calendar day
#[derive(Debug, Clone)]
pub struct DayHistory {
    pub date: NaiveDate,
    pub series: ChartSeries,
    pub entries: Vec<MoodEntry>,
    /// Malformed stored records skipped during the scan
    pub skipped: usize,
}

/// Service producing the per-day timeline view
pub struct DayHistoryService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> DayHistoryService<S> {
    pub fn new(store: S) -> Self {
        DayHistoryService { store }
    }

    /// Load all entries for the given local calendar day, time-ordered,
    /// together with their chart projection.
    pub fn execute(&self, date: NaiveDate) -> Result<DayHistory> {
        let scan = self.store.scan()?;
        let entries = select_day(&scan.entries, date);
        let series = to_chart_series(&entries);

        Ok(DayHistory {
            date,
            series,
            entries,
            skipped: scan.skipped,
        })
    }
}
