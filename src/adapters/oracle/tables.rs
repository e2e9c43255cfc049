//! Canned answer tables behind the simulated oracles.

use crate::domain::advisory::{AlertKind, AlertTemplate, WeatherCondition, WeatherReading};
use crate::domain::diagnosis::DiagnosisResult;
use crate::domain::voice::VoiceExchange;

pub fn diagnosis_table() -> Vec<DiagnosisResult> {
    vec![
        DiagnosisResult::new(
            "Leaf Blast",
            92,
            "Apply Tricyclazole fungicide. Remove affected leaves.",
            "Ensure proper drainage and avoid overhead irrigation.",
        ),
        DiagnosisResult::new(
            "Bacterial Blight",
            87,
            "Use copper-based bactericide spray.",
            "Use resistant varieties and proper field sanitation.",
        ),
    ]
}

pub fn voice_table() -> Vec<VoiceExchange> {
    vec![
        VoiceExchange::new(
            "What should I plant in kharif season?",
            "For kharif season, you can plant rice, cotton, sugarcane, or maize. \
             Rice is suitable for your region with high water availability.",
        ),
        VoiceExchange::new(
            "How to control pests in rice?",
            "Use integrated pest management. Apply neem oil for brown planthopper \
             and Trichogramma bio-agent for stem borer control.",
        ),
        VoiceExchange::new(
            "Current wheat price?",
            "Current wheat price is ₹2,150 per quintal, up by 2.5% from last week.",
        ),
    ]
}

pub fn weather_table() -> Vec<WeatherReading> {
    let reading = |condition, temperature_celsius, humidity_percent, wind_kmh| WeatherReading {
        condition,
        temperature_celsius,
        humidity_percent,
        wind_kmh,
    };
    vec![
        reading(WeatherCondition::Sunny, 28, 45, 8),
        reading(WeatherCondition::PartlyCloudy, 26, 65, 12),
        reading(WeatherCondition::Rainy, 24, 80, 15),
        reading(WeatherCondition::Cloudy, 22, 70, 10),
    ]
}

pub fn alert_table() -> Vec<AlertTemplate> {
    vec![
        AlertTemplate::new(
            AlertKind::Warning,
            "Weather Alert",
            "Heavy rainfall expected in next 24 hours. Postpone spraying operations.",
        ),
        AlertTemplate::new(
            AlertKind::Info,
            "Market Update",
            "Rice prices have increased by 2% in local mandis.",
        ),
        AlertTemplate::new(
            AlertKind::Success,
            "Scheme Alert",
            "New PM-KISAN payment has been credited to eligible farmers.",
        ),
    ]
}
