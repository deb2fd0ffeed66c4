//! Interpreting day header lines

use super::date::{self, DateMatch};
use super::segmenter::day_marker_regex;
use regex::Regex;
use std::sync::OnceLock;

fn day_number_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"Day (\d+)").unwrap())
}

/// Fields read from a day header line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayHeader {
    pub day_number: String,
    pub date: String,
    pub day_title: String,
}

impl DayHeader {
    /// Read day number, date and subtitle from a header paragraph.
    ///
    /// Each field is extracted independently and falls back to an empty
    /// string when it cannot be found.
    pub fn interpret(paragraph: &str) -> Self {
        let day_number = day_number_regex()
            .captures(paragraph)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();

        let date_match = date::find_date(paragraph);
        if date_match.is_none() {
            tracing::trace!(paragraph, "no recognizable date in day header");
        }

        let day_title = subtitle(paragraph, date_match.as_ref())
            // A header like `**Day 1 - 2024-06-14, Friday**` has a date, not a subtitle
            .filter(|title| date_match.as_ref().map_or(true, |m| m.raw != *title))
            .map(str::to_string)
            .unwrap_or_default();

        DayHeader {
            day_number,
            date: date_match.map(|m| m.display).unwrap_or_default(),
            day_title,
        }
    }

    /// `Day {n}: {date}`, plus ` - {title}` when there is a title
    pub fn full_title(&self) -> String {
        if self.day_title.is_empty() {
            format!("Day {}: {}", self.day_number, self.date)
        } else {
            format!(
                "Day {}: {} - {}",
                self.day_number, self.date, self.day_title
            )
        }
    }
}

/// Text inside the emphasized header after the first ` - ` that follows the
/// date (or the day number when the date is elsewhere), trimmed
fn subtitle<'a>(paragraph: &'a str, date: Option<&DateMatch<'_>>) -> Option<&'a str> {
    let caps = day_marker_regex().captures(paragraph)?;
    let tail = caps.get(2)?;

    let search_from = match date {
        Some(m) if m.span.start >= tail.start() && m.span.end <= tail.end() => m.span.end,
        _ => tail.start(),
    };

    let rest = &paragraph[search_from..tail.end()];
    let start = rest.find(" - ")? + " - ".len();
    let title = rest[start..].trim();
    (!title.is_empty()).then_some(title)
}
