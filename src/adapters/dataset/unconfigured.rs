//! Source used when neither a URL nor a path is configured.

use async_trait::async_trait;

use crate::domain::knowledge::CropDataset;
use crate::ports::{DatasetSource, SourceError};

/// Always reports `NotConfigured`, which sends the loader to the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredSource;

#[async_trait]
impl DatasetSource for UnconfiguredSource {
    async fn fetch(&self) -> Result<CropDataset, SourceError> {
        Err(SourceError::NotConfigured)
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}
