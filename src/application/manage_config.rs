//! Config management use case

use crate::error::{Result, TripdayError};
use crate::infrastructure::Config;
use std::path::PathBuf;

const VALID_KEYS: &str = "date_fallback, plain_text, show_summary";

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(TripdayError::Config(format!(
            "'{}' expects true or false, got '{}'",
            key, value
        ))),
    }
}

/// Service for managing viewer configuration
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the given file
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_path(&self.path)?;

        match key {
            "date_fallback" => Ok(config.date_fallback),
            "plain_text" => Ok(config.plain_text.to_string()),
            "show_summary" => Ok(config.show_summary.to_string()),
            _ => Err(TripdayError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value and save the file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_path(&self.path)?;

        match key {
            "date_fallback" => config.date_fallback = value.to_string(),
            "plain_text" => config.plain_text = parse_bool(key, value)?,
            "show_summary" => config.show_summary = parse_bool(key, value)?,
            _ => {
                return Err(TripdayError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        config.save_to_path(&self.path)?;
        tracing::debug!(key, path = %self.path.display(), "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_path(&self.path)
    }
}
