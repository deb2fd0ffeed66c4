//! Itinerary record returned by the itinerary service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The JSON document produced by the itinerary service.
///
/// Only the itinerary text is typed. Every other field (locations, dates,
/// `metadata`, and collections such as `hotels` or `local_tips`) stays in
/// `extra` as raw JSON and is written back out exactly as it came in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItineraryRecord {
    /// Wrap bare itinerary text in an otherwise empty record
    pub fn from_text(text: String) -> Self {
        ItineraryRecord {
            itinerary: Some(text),
            ..ItineraryRecord::default()
        }
    }

    /// A pass-through field, looked up by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// A top-level string field such as `from_location` or `start_date`
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.extra.get(name)?.as_str()
    }

    /// A string under `request_details.preferences`, e.g. `budget` or `pace`
    pub fn preference(&self, name: &str) -> Option<&str> {
        self.extra
            .get("request_details")?
            .get("preferences")?
            .get(name)?
            .as_str()
    }

    /// `metadata.number_of_travelers`, accepting integral floats like `2.0`
    pub fn number_of_travelers(&self) -> Option<u32> {
        let value = self.extra.get("metadata")?.get("number_of_travelers")?;
        let count = value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        })?;
        u32::try_from(count).ok()
    }
}
