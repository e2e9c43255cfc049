//! Background advisories: alerts and weather.

mod alert;
mod weather;

pub use alert::{Alert, AlertBoard, AlertKind, AlertTemplate};
pub use weather::{WeatherCondition, WeatherReading, WeatherReport};
