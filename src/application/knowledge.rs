//! One-shot knowledge base loading with fallback.

use tracing::{info, warn};

use crate::domain::knowledge::{DatasetOrigin, KnowledgeBase};
use crate::ports::{DatasetSource, SourceError};

/// Reads the dataset once. Any failure degrades to the compiled-in records;
/// nothing is retried and nothing is merged.
pub async fn load_knowledge_base(source: &dyn DatasetSource) -> KnowledgeBase {
    match source.fetch().await {
        Ok(dataset) => {
            let kb = KnowledgeBase::from_dataset(dataset, DatasetOrigin::Remote);
            info!(source = %source.describe(), crops = kb.len(), "Crop dataset loaded");
            kb
        }
        Err(SourceError::NotConfigured) => {
            info!("No crop dataset configured, using built-in records");
            KnowledgeBase::fallback()
        }
        Err(err) => {
            warn!(
                source = %source.describe(),
                error = %err,
                "Crop dataset unavailable, using built-in records"
            );
            KnowledgeBase::fallback()
        }
    }
}
