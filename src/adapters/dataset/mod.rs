//! Dataset source adapters.

mod file;
mod http;
mod unconfigured;

pub use file::FileDatasetSource;
pub use http::HttpDatasetSource;
pub use unconfigured::UnconfiguredSource;

use std::sync::Arc;
use tracing::warn;

use crate::config::DatasetConfig;
use crate::ports::DatasetSource;

/// Picks the dataset source for a configuration. A URL wins over a path.
pub fn source_for(config: &DatasetConfig) -> Arc<dyn DatasetSource> {
    if let Some(url) = &config.url {
        match HttpDatasetSource::new(url.clone(), config.timeout()) {
            Ok(source) => return Arc::new(source),
            Err(err) => warn!(%url, error = %err, "Cannot build HTTP dataset source"),
        }
    } else if let Some(path) = &config.path {
        return Arc::new(FileDatasetSource::new(path.clone()));
    }
    Arc::new(UnconfiguredSource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_takes_precedence_over_path() {
        let config = DatasetConfig {
            url: Some("https://example.com/crops.json".to_string()),
            path: Some("crops.yaml".into()),
            ..Default::default()
        };
        assert_eq!(source_for(&config).describe(), "https://example.com/crops.json");
    }

    #[test]
    fn no_source_configured() {
        assert_eq!(source_for(&DatasetConfig::default()).describe(), "none");
    }
}
