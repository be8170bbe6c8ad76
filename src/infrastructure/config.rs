//! Configuration management

use crate::error::{GooddayError, Result};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Start of the waking day, HH:MM
    pub wake: String,
    /// End of the waking day, HH:MM
    pub bed: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            wake: "07:00".to_string(),
            bed: "23:00".to_string(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .goodday/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".goodday").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GooddayError::NotMoodJournal(path.to_path_buf())
            } else {
                GooddayError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .goodday/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let goodday_dir = path.join(".goodday");
        let config_path = goodday_dir.join("config.toml");

        if !goodday_dir.exists() {
            fs::create_dir(&goodday_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Validate a HH:MM schedule time
    pub fn validate_time(value: &str) -> Result<()> {
        NaiveTime::parse_from_str(value, "%H:%M")
            .map(|_| ())
            .map_err(|_| GooddayError::Config(format!("Invalid time: '{}'", value)))
    }
}
