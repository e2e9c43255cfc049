//! Crop dataset source configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where to read the crop dataset from.
///
/// Neither source is set by default: no read is attempted and the compiled-in
/// fallback dataset is used. Set `FARM_ADVISOR__DATASET__URL` to fetch a
/// remote document at startup, with fallback on any failure.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Remote JSON document; takes precedence over `path`
    pub url: Option<String>,

    /// Local JSON or YAML file
    pub path: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl DatasetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidDatasetUrl);
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidDatasetTimeout);
        }
        Ok(())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_source() {
        let config = DatasetConfig::default();
        assert!(config.url.is_none());
        assert!(config.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_url() {
        let config = DatasetConfig {
            url: Some("ftp://example.com/crops.json".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDatasetUrl));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = DatasetConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
