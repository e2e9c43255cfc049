//! File dataset source (JSON or YAML).

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::knowledge::CropDataset;
use crate::ports::{DatasetSource, SourceError};

/// Reads the dataset from disk; `.yaml`/`.yml` files are parsed as YAML,
/// everything else as JSON.
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_yaml(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        )
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch(&self) -> Result<CropDataset, SourceError> {
        debug!("Reading crop dataset from {}", self.path.display());

        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::transport(format!("{}: {}", self.path.display(), e)))?;

        let dataset: CropDataset = if Self::is_yaml(&self.path) {
            serde_yaml::from_str(&text).map_err(|e| SourceError::parse(e.to_string()))?
        } else {
            serde_json::from_str(&text).map_err(|e| SourceError::parse(e.to_string()))?
        };
        dataset.validate()?;
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
