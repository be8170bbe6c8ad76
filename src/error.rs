//! Error types for goodday

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the goodday application
#[derive(Debug, Error)]
pub enum GooddayError {
    #[error("Not a goodday directory: {0}")]
    NotMoodJournal(PathBuf),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl GooddayError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GooddayError::NotMoodJournal(_) => 2,
            GooddayError::InvalidEntry(_) => 3,
            GooddayError::InvalidArgument(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            GooddayError::NotMoodJournal(path) => {
                format!(
                    "Not a goodday directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'goodday init' in this directory to create a new mood journal\n\
                    • Navigate to an existing goodday directory\n\
                    • Set GOODDAY_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            GooddayError::InvalidEntry(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Mood values must be numbers between -10 and +10.\n\
                    Examples:\n\
                    goodday log points 5 --notes \"walk in the park\"\n\
                    goodday log realtime -- -3",
                    msg
                )
            }
            GooddayError::InvalidArgument(msg) => {
                if msg.contains("Invalid mode") {
                    format!(
                        "{}\n\n\
                        Valid modes: timeline, points, realtime\n\
                        Example: goodday log points 5",
                        msg
                    )
                } else if msg.contains("Invalid range") {
                    format!(
                        "{}\n\n\
                        Valid ranges: week, month, year\n\
                        Example: goodday insights --range month",
                        msg
                    )
                } else if msg.contains("date") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: goodday history --date 2025-01-17",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            GooddayError::Persistence(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that .goodday/mood_data.json is readable and writable\n\
                    • If the file is corrupt, restore it from a backup or reset it to []",
                    msg
                )
            }
            GooddayError::Config(msg) => {
                if msg.contains("Invalid time") {
                    format!(
                        "{}\n\n\
                        Expected format: HH:MM (24-hour)\n\
                        Example: goodday config wake 06:30",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using GooddayError
pub type Result<T> = std::result::Result<T, GooddayError>;
