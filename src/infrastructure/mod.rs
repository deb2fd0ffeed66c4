//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod source;

pub use config::Config;
pub use source::ItinerarySource;
