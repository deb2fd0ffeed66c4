//! Splitting itinerary text into day blocks

use regex::Regex;
use std::sync::OnceLock;

/// Day header marker: `**Day <N>` with optional trailing text, closed by `**`
pub(crate) fn day_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\*\*Day (\d+)([^*]*)\*\*").unwrap())
}

/// Check whether a paragraph opens a new day
pub fn is_day_header(paragraph: &str) -> bool {
    day_marker_regex().is_match(paragraph)
}

/// A header paragraph plus every paragraph up to the next header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBlock {
    pub header: String,
    pub content: Vec<String>,
}

impl DayBlock {
    fn open(header: &str) -> Self {
        DayBlock {
            header: header.to_string(),
            content: Vec::new(),
        }
    }
}

/// Split raw itinerary text into day blocks, in source order.
///
/// Paragraphs are newline-separated and compared after trimming; blank ones
/// are skipped. Text before the first header has no day to belong to and is
/// dropped. Lines that mention a day without the emphasis markup stay in the
/// current block's content.
pub fn split_days(text: &str) -> Vec<DayBlock> {
    let mut blocks: Vec<DayBlock> = Vec::new();
    let mut dropped = 0usize;

    for paragraph in text.split('\n').map(str::trim).filter(|p| !p.is_empty()) {
        if is_day_header(paragraph) {
            blocks.push(DayBlock::open(paragraph));
        } else if let Some(current) = blocks.last_mut() {
            current.content.push(paragraph.to_string());
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "dropped paragraphs before the first day header");
    }
    tracing::debug!(days = blocks.len(), "segmented itinerary text");

    blocks
}
