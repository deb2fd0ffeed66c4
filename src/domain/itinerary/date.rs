//! Date recognition in day headers

use chrono::NaiveDate;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Long, display-ready dates: `Friday, June 14, 2024`
fn long_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday), (?:January|February|March|April|May|June|July|August|September|October|November|December) \d{1,2}, \d{4}\b",
        )
        .unwrap()
    })
}

/// Short, ISO-like dates followed by a weekday: `2024-06-14, Friday`
fn short_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2}), [A-Za-z]+\b").unwrap())
}

/// Which of the accepted encodings a header date was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    Long,
    Short,
}

/// A date found in a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch<'a> {
    /// The exact text that matched, as written in the header
    pub raw: &'a str,
    /// Byte range of `raw` within the searched text
    pub span: Range<usize>,
    /// Canonical `Weekday, Month Day, Year` form
    pub display: String,
    pub format: DateFormat,
}

/// Format a date the way day headers display it (e.g. "Friday, June 14, 2024")
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Find the header date, preferring the long format over the short one.
///
/// Long dates are returned verbatim. Short dates are rebuilt from their
/// numeric parts; the weekday written after them is not trusted. A short
/// date naming a day that does not exist (e.g. `2024-02-30`) is not a match.
pub fn find_date(text: &str) -> Option<DateMatch<'_>> {
    if let Some(m) = long_date_regex().find(text) {
        return Some(DateMatch {
            raw: m.as_str(),
            span: m.range(),
            display: m.as_str().to_string(),
            format: DateFormat::Long,
        });
    }

    let caps = short_date_regex().captures(text)?;
    let whole = caps.get(0)?;
    let raw = whole.as_str();
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Some(DateMatch {
            raw,
            span: whole.range(),
            display: display_date(date),
            format: DateFormat::Short,
        }),
        None => {
            tracing::trace!(raw, "short date names a day that does not exist");
            None
        }
    }
}

/// Canonical display date for a header, or an empty string
pub fn extract_date(text: &str) -> String {
    find_date(text).map(|m| m.display).unwrap_or_default()
}
