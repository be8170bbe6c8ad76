//! Insight analysis use case

use crate::domain::{summarize, InsightReport, RangePolicy};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use chrono::Utc;

/// Service producing behavioral insights over a trailing window
pub struct InsightsService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> InsightsService<S> {
    pub fn new(store: S) -> Self {
        InsightsService { store }
    }

    /// Summarize the store over the trailing window ending now.
    /// Pure read path; never mutates the store.
    pub fn execute(&self, range: RangePolicy) -> Result<InsightReport> {
        let scan = self.store.scan()?;
        Ok(summarize(&scan.entries, range, Utc::now()))
    }
}
