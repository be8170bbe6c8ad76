//! Application layer - Use cases and orchestration

pub mod day_history;
pub mod init;
pub mod insights;
pub mod manage_config;
pub mod record_mood;

pub use day_history::{DayHistory, DayHistoryService};
pub use insights::InsightsService;
pub use manage_config::ConfigService;
pub use record_mood::RecordMoodService;
