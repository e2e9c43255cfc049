//! Application layer - The explicitly owned engine context and its pipelines.
//!
//! `AppContext` owns every piece of mutable state. The pipelines and the
//! notification scheduler run their delayed work on Tokio tasks; each one
//! keeps its state behind a mutex that is never held across an `.await`, and
//! publishes to the update sink while still holding it so the rendering layer
//! sees changes in the order they were applied.

mod context;
mod deferred;
mod diagnosis;
mod knowledge;
mod scheduler;
mod snapshot;
mod voice;

pub use context::{AppContext, Collaborators};
pub use deferred::Deferred;
pub use diagnosis::DiagnosisPipeline;
pub use knowledge::load_knowledge_base;
pub use scheduler::NotificationScheduler;
pub use snapshot::{AppSnapshot, DiagnosisSnapshot, VoiceSnapshot};
pub use voice::VoicePipeline;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks engine state. State is plain data that every mutator leaves
/// consistent, so a poisoned lock is recovered rather than propagated.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
