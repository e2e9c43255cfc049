//! Compiled-in dataset used whenever the remote dataset cannot be loaded.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use super::crop::{CropDataset, CropRecord, Fertilizer, MarketPrice, Season, WaterRequirement};

static FALLBACK: Lazy<CropDataset> = Lazy::new(|| {
    let mut crops = BTreeMap::new();
    crops.insert(
        "rice".to_string(),
        CropRecord {
            name_hindi: "चावल".to_string(),
            season: Season::Kharif,
            sowing: "June-July".to_string(),
            harvest: "October-November".to_string(),
            soil_types: soils(&["alluvial", "clay", "sandy"]),
            water_requirement: WaterRequirement::High,
            fertilizer: Fertilizer::new(120, 60, 40),
            market_price: MarketPrice::new(2850.0, "-1.2%"),
        },
    );
    crops.insert(
        "wheat".to_string(),
        CropRecord {
            name_hindi: "गेहूं".to_string(),
            season: Season::Rabi,
            sowing: "October-December".to_string(),
            harvest: "March-April".to_string(),
            soil_types: soils(&["alluvial", "loamy"]),
            water_requirement: WaterRequirement::Moderate,
            fertilizer: Fertilizer::new(120, 60, 40),
            market_price: MarketPrice::new(2150.0, "+2.5%"),
        },
    );
    crops.insert(
        "cotton".to_string(),
        CropRecord {
            name_hindi: "कपास".to_string(),
            season: Season::Kharif,
            sowing: "April-June".to_string(),
            harvest: "October-January".to_string(),
            soil_types: soils(&["black_soil", "alluvial"]),
            water_requirement: WaterRequirement::Moderate,
            fertilizer: Fertilizer::new(150, 75, 75),
            market_price: MarketPrice::new(6700.0, "+3.8%"),
        },
    );
    CropDataset { crops }
});

fn soils(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Returns a copy of the fallback dataset.
pub fn fallback_dataset() -> CropDataset {
    FALLBACK.clone()
}
