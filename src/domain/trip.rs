//! Trip summary shown above the daily plan

use super::itinerary::date::display_date;
use super::record::ItineraryRecord;
use super::weather::WeatherReport;
use chrono::{DateTime, NaiveDate};

/// Parse a trip date given as `YYYY-MM-DD` or as an RFC 3339 timestamp
pub fn parse_trip_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Display form of a trip date; unparseable input is shown as given
pub fn format_trip_date(input: &str) -> String {
    parse_trip_date(input)
        .map(display_date)
        .unwrap_or_else(|| input.trim().to_string())
}

/// Inclusive number of days between start and end
pub fn trip_length(start: NaiveDate, end: NaiveDate) -> Option<i64> {
    let days = (end - start).num_days();
    (days >= 0).then_some(days + 1)
}

/// Overview of a trip, built from the record alone
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub length_days: Option<i64>,
    pub travelers: Option<u32>,
    pub budget: Option<String>,
    pub pace: Option<String>,
    pub weather: Option<WeatherReport>,
}

impl TripSummary {
    pub fn from_record(record: &ItineraryRecord) -> Self {
        let start_date = record.text_field("start_date");
        // A missing end date means a single-day trip
        let end_date = record.text_field("end_date").or(start_date);

        let length_days = match (
            start_date.and_then(parse_trip_date),
            end_date.and_then(parse_trip_date),
        ) {
            (Some(start), Some(end)) => trip_length(start, end),
            _ => None,
        };

        TripSummary {
            from_location: record.text_field("from_location").map(str::to_string),
            to_location: record.text_field("to_location").map(str::to_string),
            start: start_date.map(format_trip_date),
            end: record.text_field("end_date").map(format_trip_date),
            length_days,
            travelers: record.number_of_travelers(),
            budget: record.preference("budget").map(str::to_string),
            pace: record.preference("pace").map(str::to_string),
            weather: record.field("weather_info").and_then(WeatherReport::from_value),
        }
    }

    /// "Berlin to Lisbon", or whichever side is known
    pub fn route(&self) -> Option<String> {
        match (&self.from_location, &self.to_location) {
            (Some(from), Some(to)) => Some(format!("{} to {}", from, to)),
            (None, Some(to)) => Some(to.clone()),
            (Some(from), None) => Some(format!("from {}", from)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::WeatherKind;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ItineraryRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_trip_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 14);
        assert_eq!(parse_trip_date("2024-06-14"), expected);
        assert_eq!(parse_trip_date("2024-06-14T09:30:00Z"), expected);
        assert_eq!(parse_trip_date("2024-06-14T23:30:00+02:00"), expected);
        assert_eq!(parse_trip_date("June 14"), None);
    }

    #[test]
    fn test_format_trip_date() {
        assert_eq!(format_trip_date("2024-06-14"), "Friday, June 14, 2024");
        assert_eq!(format_trip_date("next summer"), "next summer");
    }

    #[test]
    fn test_trip_length() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        assert_eq!(trip_length(start, end), Some(3));
        assert_eq!(trip_length(start, start), Some(1));
        assert_eq!(trip_length(end, start), None);
    }

    #[test]
    fn test_summary_from_record() {
        let summary = TripSummary::from_record(&record(json!({
            "from_location": "Berlin",
            "to_location": "Lisbon",
            "start_date": "2024-06-14",
            "end_date": "2024-06-17",
            "metadata": {"number_of_travelers": 3},
            "weather_info": {"status": "light rain", "temperature": 18},
            "request_details": {"preferences": {"budget": "luxury", "pace": "intense"}}
        })));

        assert_eq!(summary.route().as_deref(), Some("Berlin to Lisbon"));
        assert_eq!(summary.start.as_deref(), Some("Friday, June 14, 2024"));
        assert_eq!(summary.end.as_deref(), Some("Monday, June 17, 2024"));
        assert_eq!(summary.length_days, Some(4));
        assert_eq!(summary.travelers, Some(3));
        assert_eq!(summary.budget.as_deref(), Some("luxury"));
        assert_eq!(summary.pace.as_deref(), Some("intense"));
        assert_eq!(summary.weather.unwrap().kind, WeatherKind::Rain);
    }

    #[test]
    fn test_summary_without_end_date_is_one_day() {
        let summary = TripSummary::from_record(&record(json!({"start_date": "2024-06-14"})));
        assert_eq!(summary.length_days, Some(1));
        assert_eq!(summary.end, None);
    }

    #[test]
    fn test_summary_tolerates_loose_metadata() {
        let summary = TripSummary::from_record(&record(json!({
            "to_location": "Lisbon",
            "start_date": null,
            "metadata": {"includes_weather": null, "number_of_travelers": 4.0}
        })));
        assert_eq!(summary.route().as_deref(), Some("Lisbon"));
        assert_eq!(summary.start, None);
        assert_eq!(summary.travelers, Some(4));
    }

    #[test]
    fn test_summary_of_empty_record() {
        let summary = TripSummary::from_record(&ItineraryRecord::default());
        assert_eq!(summary.route(), None);
        assert_eq!(summary.length_days, None);
        assert_eq!(summary.weather, None);
    }
}
