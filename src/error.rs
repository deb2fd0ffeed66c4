//! Error types for tripday

use thiserror::Error;

/// Main error type for tripday application
#[derive(Debug, Error)]
pub enum TripdayError {
    #[error("Day not found: {0}")]
    DayNotFound(String),

    #[error("Itinerary record has no itinerary text: {0}")]
    MissingItinerary(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TripdayError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TripdayError::Json(_) | TripdayError::MissingItinerary(_) => 2,
            TripdayError::DayNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TripdayError::DayNotFound(day) => {
                format!(
                    "No day numbered '{}' in this itinerary\n\n\
                    Suggestions:\n\
                    • Run 'tripday days <SOURCE>' to see the available days\n\
                    • Day numbers come from the '**Day N**' headers, not from tab order",
                    day
                )
            }
            TripdayError::MissingItinerary(source) => {
                format!(
                    "The record read from '{}' has no 'itinerary' text field\n\n\
                    Suggestions:\n\
                    • Check that the file is the JSON returned by the itinerary service\n\
                    • Pass --raw to read the input as plain itinerary text",
                    source
                )
            }
            TripdayError::Json(err) => {
                format!(
                    "Failed to read itinerary record: {}\n\n\
                    Suggestions:\n\
                    • Check that the input is valid JSON\n\
                    • Pass --raw to read the input as plain itinerary text",
                    err
                )
            }
            TripdayError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: tripday config date_fallback 'TBD'",
                        msg
                    )
                } else if msg.contains("expects true or false") {
                    format!(
                        "{}\n\n\
                        Example: tripday config plain_text true",
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

/// Result type using TripdayError
pub type Result<T> = std::result::Result<T, TripdayError>;
