//! Domain layer - Itinerary parsing and trip models

pub mod itinerary;
pub mod markup;
pub mod record;
pub mod trip;
pub mod weather;

pub use itinerary::{segment, Day};
pub use record::ItineraryRecord;
pub use trip::TripSummary;
pub use weather::{WeatherKind, WeatherReport};
