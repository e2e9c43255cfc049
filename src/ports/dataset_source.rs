//! DatasetSource port - Where the crop dataset is read from.
//!
//! The knowledge base reads the dataset exactly once at startup. Any error
//! returned here is absorbed by falling back to the compiled-in dataset, so
//! implementations only need to report what went wrong.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::knowledge::CropDataset;

/// Port for retrieving the structured crop dataset.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Reads and parses the whole document. No partial results.
    async fn fetch(&self) -> Result<CropDataset, SourceError>;

    /// Human-readable origin for logs (URL, path, ...).
    fn describe(&self) -> String;
}

/// Why the dataset could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// No source is configured.
    #[error("no dataset source configured")]
    NotConfigured,

    /// The document could not be retrieved.
    #[error("transport error: {0}")]
    Transport(String),

    /// The document was retrieved but is not a crop dataset.
    #[error("parse error: {0}")]
    Parse(String),

    /// The document parsed but breaks a record invariant.
    #[error("invalid dataset: {0}")]
    Invalid(#[from] ValidationError),
}

impl SourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        SourceError::Transport(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        SourceError::Parse(message.into())
    }
}
