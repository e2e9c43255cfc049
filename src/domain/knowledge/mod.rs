//! Crop knowledge: records, the knowledge base, and derived views.

mod base;
mod crop;
mod display;
mod fallback;
mod prices;

pub use base::{DatasetOrigin, KnowledgeBase};
pub use crop::{
    CropDataset, CropRecord, Fertilizer, MarketPrice, PriceTrend, Season, WaterRequirement,
};
pub use display::{format_inr, soil_label, CropPanel, CropView};
pub use fallback::fallback_dataset;
pub use prices::{price_history, PriceBoard, PricePoint, PriceRow, PriceSeries};
