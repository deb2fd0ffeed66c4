//! Configuration management

use crate::error::{Result, TripdayError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "tripday.toml";

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV_VAR: &str = "TRIPDAY_CONFIG";

const DEFAULT_DATE_FALLBACK: &str = "Date to be confirmed";

fn default_date_fallback() -> String {
    DEFAULT_DATE_FALLBACK.to_string()
}

fn default_show_summary() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Shown in place of a day's date when none was recognized
    #[serde(default = "default_date_fallback")]
    pub date_fallback: String,

    /// Strip inline markdown from day content
    #[serde(default)]
    pub plain_text: bool,

    /// Print the trip summary before the days in `show`
    #[serde(default = "default_show_summary")]
    pub show_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            date_fallback: default_date_fallback(),
            plain_text: false,
            show_summary: default_show_summary(),
        }
    }
}

impl Config {
    /// Config file location: `TRIPDAY_CONFIG` if set, else `tripday.toml` in the current directory
    pub fn resolve_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        Ok(std::env::current_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load config from the resolved location, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::resolve_path()?)
    }

    /// Load config from a file; a missing file yields the defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(TripdayError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            TripdayError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Save config to a file, creating parent directories as needed
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}
