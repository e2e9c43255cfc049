//! In-memory update sink.
//!
//! Records every update in delivery order so tests can inspect exactly
//! what the rendering layer saw.

use std::sync::{PoisonError, RwLock};

use crate::ports::{UiUpdate, UpdateSink};

/// Recording sink with query helpers.
///
/// # Example
///
/// ```ignore
/// let sink = Arc::new(InMemoryUpdateSink::new());
/// // ... drive the engine ...
/// assert!(sink.has_update("diagnosis_resolved"));
/// assert_eq!(sink.count_of("voice_answered"), 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUpdateSink {
    published: RwLock<Vec<UiUpdate>>,
}

impl InMemoryUpdateSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All updates in the order they were published.
    pub fn updates(&self) -> Vec<UiUpdate> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Updates of one kind (see [`UiUpdate::kind`]).
    pub fn updates_of(&self, kind: &str) -> Vec<UiUpdate> {
        self.updates()
            .into_iter()
            .filter(|u| u.kind() == kind)
            .collect()
    }

    pub fn count_of(&self, kind: &str) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|u| u.kind() == kind)
            .count()
    }

    pub fn has_update(&self, kind: &str) -> bool {
        self.count_of(kind) > 0
    }

    pub fn last(&self) -> Option<UiUpdate> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl UpdateSink for InMemoryUpdateSink {
    fn publish(&self, update: UiUpdate) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(update);
    }
}
