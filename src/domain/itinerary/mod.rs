//! Itinerary text grammar
//!
//! The itinerary service returns the whole plan as one text blob. Day headers
//! such as `**Day 2: 2024-06-15, Saturday - Old Town**` are embedded in free
//! narrative. [`segment`] turns that blob into ordered [`Day`] records.

pub mod date;
pub mod day;
pub mod header;
pub mod segmenter;

pub use day::Day;
pub use header::DayHeader;
pub use segmenter::DayBlock;

/// Parse raw itinerary text into ordered day records.
///
/// Never fails: paragraphs before the first header are dropped, and header
/// fields that cannot be recognized come back as empty strings.
pub fn segment(text: &str) -> Vec<Day> {
    segmenter::split_days(text)
        .into_iter()
        .map(|block| Day::new(DayHeader::interpret(&block.header), block.content))
        .collect()
}
