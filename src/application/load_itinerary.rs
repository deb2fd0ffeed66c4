//! Load and parse itinerary use case

use crate::domain::{segment, Day, ItineraryRecord};
use crate::error::{Result, TripdayError};
use crate::infrastructure::ItinerarySource;
use serde::Serialize;

/// A record together with the days parsed from its itinerary text.
///
/// Serializes as the original record with a `days` array added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedItinerary {
    #[serde(flatten)]
    pub record: ItineraryRecord,
    pub days: Vec<Day>,
}

impl ParsedItinerary {
    /// Segment the record's itinerary text
    pub fn from_record(record: ItineraryRecord, origin: &str) -> Result<Self> {
        let text = record
            .itinerary
            .as_deref()
            .ok_or_else(|| TripdayError::MissingItinerary(origin.to_string()))?;

        let days = segment(text);
        if days.is_empty() {
            tracing::info!(origin, "itinerary text has no day headers");
        }

        Ok(ParsedItinerary { record, days })
    }

    /// Parse bare itinerary text, with no surrounding record
    pub fn from_text(text: String) -> Self {
        let days = segment(&text);
        ParsedItinerary {
            record: ItineraryRecord::from_text(text),
            days,
        }
    }

    /// Days whose header carries the given number, in source order
    pub fn days_numbered(&self, day_number: &str) -> Result<Vec<&Day>> {
        let wanted = day_number.trim();
        let matches: Vec<&Day> = self
            .days
            .iter()
            .filter(|day| day.day_number == wanted)
            .collect();

        if matches.is_empty() {
            return Err(TripdayError::DayNotFound(wanted.to_string()));
        }
        Ok(matches)
    }
}

/// Service for loading an itinerary from a source and parsing it
pub struct LoadItineraryService {
    source: ItinerarySource,
    raw: bool,
}

impl LoadItineraryService {
    /// Create a new load service; `raw` reads the input as bare itinerary text
    pub fn new(source: ItinerarySource, raw: bool) -> Self {
        LoadItineraryService { source, raw }
    }

    /// Read, deserialize and segment the itinerary
    pub fn execute(&self) -> Result<ParsedItinerary> {
        let contents = self.source.read_to_string()?;
        tracing::debug!(source = %self.source, bytes = contents.len(), raw = self.raw, "loaded itinerary");

        if self.raw {
            return Ok(ParsedItinerary::from_text(contents));
        }

        let record: ItineraryRecord = serde_json::from_str(&contents)?;
        ParsedItinerary::from_record(record, &self.source.to_string())
    }
}
