//! Weather status classification

use serde_json::Value;
use std::fmt;

/// Broad weather kind derived from a free-text status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Clear,
    Rain,
    Snow,
    Thunder,
    Fog,
    PartlyCloudy,
    Cloudy,
    Night,
}

impl WeatherKind {
    /// Classify a status such as "light rain" or "Partly cloudy, sunny spells".
    ///
    /// Checks run in a fixed order, so "rain and thunder" is `Rain`.
    /// Anything unrecognized is `Clear`.
    pub fn classify(status: &str) -> Self {
        let status = status.to_lowercase();

        if status.contains("clear") {
            WeatherKind::Clear
        } else if status.contains("rain") {
            WeatherKind::Rain
        } else if status.contains("snow") {
            WeatherKind::Snow
        } else if status.contains("thunder") {
            WeatherKind::Thunder
        } else if status.contains("fog") || status.contains("mist") {
            WeatherKind::Fog
        } else if status.contains("cloud") && status.contains("sun") {
            WeatherKind::PartlyCloudy
        } else if status.contains("cloud") {
            WeatherKind::Cloudy
        } else if status.contains("night") || status.contains("evening") {
            WeatherKind::Night
        } else {
            WeatherKind::Clear
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "clear",
            WeatherKind::Rain => "rain",
            WeatherKind::Snow => "snow",
            WeatherKind::Thunder => "thunderstorm",
            WeatherKind::Fog => "fog",
            WeatherKind::PartlyCloudy => "partly cloudy",
            WeatherKind::Cloudy => "cloudy",
            WeatherKind::Night => "night",
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weather as reported in a record's `weather_info`
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub status: String,
    pub kind: WeatherKind,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
}

impl WeatherReport {
    /// Read `weather_info`, which is either an object with a `status` or a bare string
    pub fn from_value(value: &Value) -> Option<Self> {
        let (status, object) = match value {
            Value::String(s) => (s.as_str(), None),
            Value::Object(map) => (map.get("status")?.as_str()?, Some(map)),
            _ => return None,
        };
        if status.trim().is_empty() {
            return None;
        }

        let number = |key: &str| object.and_then(|m| m.get(key)).and_then(Value::as_f64);

        Some(WeatherReport {
            status: status.trim().to_string(),
            kind: WeatherKind::classify(status),
            temperature: number("temperature"),
            feels_like: number("feels_like"),
            humidity: number("humidity"),
        })
    }
}
