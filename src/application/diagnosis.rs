//! Diagnosis pipeline: capture → simulated processing → sampled result.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use super::deferred::Deferred;
use super::lock;
use super::snapshot::DiagnosisSnapshot;
use crate::config::TimingConfig;
use crate::domain::diagnosis::{CaptureEvent, DiagnosisState, DiagnosisStatus};
use crate::domain::foundation::{CaptureId, DomainError};
use crate::ports::{DiagnosisOracle, UiUpdate, UpdateSink};

/// Runs one capture at a time. A submission while processing is `Busy`;
/// a submission after a result supersedes it.
#[derive(Clone)]
pub struct DiagnosisPipeline {
    state: Arc<Mutex<DiagnosisState>>,
    oracle: Arc<DiagnosisOracle>,
    sink: Arc<dyn UpdateSink>,
    timing: TimingConfig,
    pending: Arc<Mutex<Option<Deferred>>>,
}

impl DiagnosisPipeline {
    pub fn new(oracle: Arc<DiagnosisOracle>, sink: Arc<dyn UpdateSink>, timing: TimingConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(DiagnosisState::default())),
            oracle,
            sink,
            timing,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Accepts a capture and schedules its result.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for an empty upload, before anything changes
    /// - `Busy` while a previous capture is still processing
    pub fn submit(&self, event: CaptureEvent) -> Result<CaptureId, DomainError> {
        event.validate()?;
        let source = event.source();

        let id = {
            let mut state = lock(&self.state);
            let id = state.begin(source).map_err(|err| {
                warn!(%source, "Capture rejected, already processing");
                err
            })?;
            self.sink.publish(UiUpdate::DiagnosisProcessing { source });
            id
        };
        debug!(%source, capture_id = %id, "Capture accepted");

        let pipeline = self.clone();
        let task = Deferred::after(self.timing.capture_delay(source), async move {
            pipeline.finish(id).await;
        });
        *lock(&self.pending) = Some(task);
        Ok(id)
    }

    pub fn status(&self) -> DiagnosisStatus {
        lock(&self.state).status()
    }

    pub fn snapshot(&self) -> DiagnosisSnapshot {
        let state = lock(&self.state);
        DiagnosisSnapshot {
            status: state.status(),
            result: state.result().cloned(),
        }
    }

    /// Drops the pending capture, if any. Only used on teardown.
    pub fn shutdown(&self) {
        if let Some(task) = lock(&self.pending).take() {
            task.cancel();
        }
    }

    async fn finish(&self, id: CaptureId) {
        let sampled = self.oracle.sample().await;

        let mut state = lock(&self.state);
        match sampled {
            Ok(result) => {
                if state.resolve(id, result.clone()) {
                    debug!(capture_id = %id, diagnosis = %result.name, "Diagnosis resolved");
                    self.sink.publish(UiUpdate::DiagnosisResolved(result));
                }
            }
            Err(err) => {
                if state.fail(id) {
                    warn!(capture_id = %id, error = %err, "Diagnosis oracle failed");
                    self.sink.publish(UiUpdate::DiagnosisFailed {
                        reason: err.to_string(),
                    });
                }
            }
        }
    }
}
