//! Reading itinerary input from a file or stdin

use crate::error::Result;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where an itinerary document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItinerarySource {
    Stdin,
    File(PathBuf),
}

impl ItinerarySource {
    /// `-` means stdin, anything else is a path
    pub fn parse(input: &str) -> Self {
        if input == "-" {
            ItinerarySource::Stdin
        } else {
            ItinerarySource::File(PathBuf::from(input))
        }
    }

    /// Read the whole document
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            ItinerarySource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            ItinerarySource::File(path) => Ok(fs::read_to_string(path)?),
        }
    }
}

impl fmt::Display for ItinerarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItinerarySource::Stdin => f.write_str("<stdin>"),
            ItinerarySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
