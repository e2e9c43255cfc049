//! Pure display helpers derived from crop records.

use serde::{Deserialize, Serialize};

use super::crop::{CropRecord, PriceTrend};

/// Formats rupees with Indian digit grouping and no fractional part.
///
/// `2850.0` becomes `₹2,850`, `123456.0` becomes `₹1,23,456`.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{}", rounded.abs() as u64);

    if digits.len() <= 3 {
        return format!("{}₹{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{}₹{},{}", sign, groups.join(","), tail)
}

/// Joins soil types for display, "Various" when none are listed.
pub fn soil_label(soil_types: &[String]) -> String {
    if soil_types.is_empty() {
        "Various".to_string()
    } else {
        soil_types.join(", ")
    }
}

/// Everything the crop detail view shows for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropView {
    pub crop_id: String,
    pub local_name: String,
    pub season: String,
    pub sowing: String,
    pub harvest: String,
    pub soil: String,
    pub water_requirement: String,
    pub price: String,
    pub price_change: String,
    pub trend: PriceTrend,
    pub fertilizer: Vec<String>,
}

impl CropView {
    pub fn from_record(crop_id: &str, record: &CropRecord) -> Self {
        let dose = &record.fertilizer;
        Self {
            crop_id: crop_id.to_string(),
            local_name: record.name_hindi.clone(),
            season: record.season.to_string(),
            sowing: record.sowing.clone(),
            harvest: record.harvest.clone(),
            soil: soil_label(&record.soil_types),
            water_requirement: record.water_requirement.to_string(),
            price: format!("{}/quintal", format_inr(record.market_price.current)),
            price_change: record.market_price.change.clone(),
            trend: record.market_price.trend(),
            fertilizer: vec![
                format!("Nitrogen: {} kg/ha", dose.nitrogen),
                format!("Phosphorus: {} kg/ha", dose.phosphorus),
                format!("Potassium: {} kg/ha", dose.potassium),
            ],
        }
    }
}

/// Result of selecting a crop: its details or the empty state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CropPanel {
    Details(CropView),
    NoData { crop_id: String },
}

impl CropPanel {
    pub fn is_empty(&self) -> bool {
        matches!(self, CropPanel::NoData { .. })
    }
}
