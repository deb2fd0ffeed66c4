//! tripday - Terminal viewer for generated travel itineraries
//!
//! Loads the itinerary record produced by an itinerary-generation service,
//! splits its free-text plan into ordered day records and renders them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{segment, Day};
pub use error::TripdayError;
