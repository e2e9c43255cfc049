//! Crop agronomic records as they appear in the crop dataset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Growing season a crop belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
    #[serde(other)]
    Other,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
            Season::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

/// Irrigation need of a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterRequirement {
    Low,
    Moderate,
    High,
}

impl fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WaterRequirement::Low => "Low",
            WaterRequirement::Moderate => "Moderate",
            WaterRequirement::High => "High",
        };
        write!(f, "{}", s)
    }
}

/// Recommended NPK dose in kg/ha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fertilizer {
    #[serde(rename = "N")]
    pub nitrogen: u32,
    #[serde(rename = "P")]
    pub phosphorus: u32,
    #[serde(rename = "K")]
    pub potassium: u32,
}

impl Fertilizer {
    pub fn new(nitrogen: u32, phosphorus: u32, potassium: u32) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
        }
    }
}

/// Direction of the latest price movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTrend {
    Positive,
    Negative,
}

impl PriceTrend {
    /// Classifies a change string: only a leading `+` counts as positive.
    pub fn classify(change: &str) -> Self {
        if change.starts_with('+') {
            PriceTrend::Positive
        } else {
            PriceTrend::Negative
        }
    }

    /// CSS-style class name the rendering layer keys off.
    pub fn as_class(&self) -> &'static str {
        match self {
            PriceTrend::Positive => "positive",
            PriceTrend::Negative => "negative",
        }
    }
}

/// Market price in rupees per quintal with its latest change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrice {
    pub current: f64,
    pub change: String,
}

impl MarketPrice {
    pub fn new(current: f64, change: impl Into<String>) -> Self {
        Self {
            current,
            change: change.into(),
        }
    }

    pub fn trend(&self) -> PriceTrend {
        PriceTrend::classify(&self.change)
    }
}

/// Agronomic record for one crop. The crop identifier is the dataset key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    pub name_hindi: String,
    pub season: Season,
    pub sowing: String,
    pub harvest: String,
    pub soil_types: Vec<String>,
    pub water_requirement: WaterRequirement,
    pub fertilizer: Fertilizer,
    pub market_price: MarketPrice,
}

impl CropRecord {
    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.soil_types.is_empty() {
            return Err(ValidationError::empty_field("soil_types"));
        }
        if self.soil_types.iter().any(|s| s.trim().is_empty()) {
            return Err(ValidationError::invalid_format(
                "soil_types",
                "soil type names cannot be blank",
            ));
        }
        let price = self.market_price.current;
        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::invalid_format(
                "market_price.current",
                format!("price must be positive, got {}", price),
            ));
        }
        Ok(())
    }
}

/// Document shape served by the dataset source: `{ "crops": { id: record } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropDataset {
    pub crops: BTreeMap<String, CropRecord>,
}

impl CropDataset {
    /// Validates every record; one bad record rejects the whole document.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.crops.is_empty() {
            return Err(ValidationError::empty_field("crops"));
        }
        for (id, record) in &self.crops {
            if id.trim().is_empty() {
                return Err(ValidationError::empty_field("crop id"));
            }
            record.validate().map_err(|e| {
                ValidationError::invalid_format(format!("crops.{}", id), e.to_string())
            })?;
        }
        Ok(())
    }
}
