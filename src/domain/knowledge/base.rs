//! The knowledge base: an immutable map from crop id to record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::crop::{CropDataset, CropRecord};
use super::fallback::fallback_dataset;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Where the loaded records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetOrigin {
    Remote,
    Fallback,
}

/// Read-only crop knowledge, built once at startup.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    crops: BTreeMap<String, CropRecord>,
    origin: DatasetOrigin,
}

impl KnowledgeBase {
    /// Wraps an already validated dataset.
    pub fn from_dataset(dataset: CropDataset, origin: DatasetOrigin) -> Self {
        Self {
            crops: dataset.crops,
            origin,
        }
    }

    /// Knowledge base backed by the compiled-in records.
    pub fn fallback() -> Self {
        Self::from_dataset(fallback_dataset(), DatasetOrigin::Fallback)
    }

    pub fn origin(&self) -> DatasetOrigin {
        self.origin
    }

    /// Point lookup. Unknown or empty ids yield `CropNotFound`.
    pub fn lookup(&self, crop_id: &str) -> Result<&CropRecord, DomainError> {
        let key = crop_id.trim();
        self.crops.get(key).ok_or_else(|| {
            DomainError::new(ErrorCode::CropNotFound, "No data available for this crop")
                .with_detail("crop_id", key)
        })
    }

    /// Crop ids in stable (sorted) order.
    pub fn crop_ids(&self) -> impl Iterator<Item = &str> {
        self.crops.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CropRecord)> {
        self.crops.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}
