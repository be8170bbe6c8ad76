//! Config management use case

use crate::error::{GooddayError, Result};
use crate::infrastructure::{Config, JsonFileStore};

/// Service for managing journal configuration
pub struct ConfigService {
    store: JsonFileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: JsonFileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "wake" => Ok(config.wake.clone()),
            "bed" => Ok(config.bed.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(GooddayError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: wake, bed, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "wake" => {
                Config::validate_time(value)?;
                config.wake = value.to_string();
            }
            "bed" => {
                Config::validate_time(value)?;
                config.bed = value.to_string();
            }
            "created" => {
                return Err(GooddayError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(GooddayError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: wake, bed",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
