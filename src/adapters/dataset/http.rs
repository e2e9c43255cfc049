//! HTTP dataset source.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::domain::knowledge::CropDataset;
use crate::ports::{DatasetSource, SourceError};

/// Fetches the dataset as JSON with a single GET request.
pub struct HttpDatasetSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDatasetSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::transport(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> Result<CropDataset, SourceError> {
        debug!("Fetching crop dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::transport(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::transport(e.to_string()))?;
        let dataset: CropDataset =
            serde_json::from_str(&body).map_err(|e| SourceError::parse(e.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
