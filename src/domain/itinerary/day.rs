//! Day record handed to the renderer

use super::header::DayHeader;
use serde::{Deserialize, Serialize};

/// One day of the itinerary, in display-ready form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Digits from the `Day <N>` marker
    pub day_number: String,
    /// `Weekday, Month Day, Year`, or empty when no date was recognized
    pub date: String,
    /// Subtitle after the dash, or empty
    pub day_title: String,
    pub full_title: String,
    /// Paragraphs between this header and the next one
    pub content: Vec<String>,
}

impl Day {
    pub fn new(header: DayHeader, content: Vec<String>) -> Self {
        let full_title = header.full_title();
        Day {
            day_number: header.day_number,
            date: header.date,
            day_title: header.day_title,
            full_title,
            content,
        }
    }

    pub fn has_date(&self) -> bool {
        !self.date.is_empty()
    }

    pub fn has_title(&self) -> bool {
        !self.day_title.is_empty()
    }
}
