//! Application layer - Use cases and orchestration

pub mod load_itinerary;
pub mod manage_config;

pub use load_itinerary::{LoadItineraryService, ParsedItinerary};
pub use manage_config::ConfigService;
