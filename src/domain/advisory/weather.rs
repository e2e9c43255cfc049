//! Simulated weather readings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Rainy,
    Cloudy,
}

impl WeatherCondition {
    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀️",
            WeatherCondition::PartlyCloudy => "⛅",
            WeatherCondition::Rainy => "🌧️",
            WeatherCondition::Cloudy => "☁️",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Cloudy => "Cloudy",
        };
        write!(f, "{}", s)
    }
}

/// One weather sample without a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub condition: WeatherCondition,
    pub temperature_celsius: i16,
    pub humidity_percent: u8,
    pub wind_kmh: u16,
}

/// A reading stamped with the time it was published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(flatten)]
    pub reading: WeatherReading,
    pub observed_at: Timestamp,
}

impl WeatherReport {
    pub fn observe(reading: WeatherReading) -> Self {
        Self {
            reading,
            observed_at: Timestamp::now(),
        }
    }

    /// "28°C".
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.reading.temperature_celsius)
    }

    /// Humidity and wind line.
    pub fn details_label(&self) -> String {
        format!(
            "Humidity: {}% · Wind: {} km/h",
            self.reading.humidity_percent, self.reading.wind_kmh
        )
    }
}
