//! Diagnosis result and the Idle → Processing → Resolved lifecycle.

use serde::{Deserialize, Serialize};

use super::capture::CaptureSource;
use crate::domain::foundation::{CaptureId, DomainError, StateMachine};

/// One sampled diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub name: String,
    pub confidence_percent: u8,
    pub treatment: String,
    pub prevention: String,
}

impl DiagnosisResult {
    pub fn new(
        name: impl Into<String>,
        confidence_percent: u8,
        treatment: impl Into<String>,
        prevention: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            confidence_percent,
            treatment: treatment.into(),
            prevention: prevention.into(),
        }
    }

    /// "92%".
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence_percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisStatus {
    #[default]
    Idle,
    Processing,
    Resolved,
}

impl StateMachine for DiagnosisStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DiagnosisStatus::*;
        matches!(
            (self, target),
            (Idle, Processing)
                | (Resolved, Processing)
                | (Processing, Resolved)
                // oracle failure
                | (Processing, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DiagnosisStatus::*;
        match self {
            Idle => vec![Processing],
            Processing => vec![Resolved, Idle],
            Resolved => vec![Processing],
        }
    }
}

/// In-flight capture bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCapture {
    pub id: CaptureId,
    pub source: CaptureSource,
}

/// State owned by the diagnosis pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosisState {
    status: DiagnosisStatus,
    pending: Option<PendingCapture>,
    result: Option<DiagnosisResult>,
}

impl DiagnosisState {
    pub fn status(&self) -> DiagnosisStatus {
        self.status
    }

    pub fn result(&self) -> Option<&DiagnosisResult> {
        self.result.as_ref()
    }

    pub fn pending(&self) -> Option<PendingCapture> {
        self.pending
    }

    /// Enters `Processing`. A fresh capture supersedes a stale result.
    ///
    /// # Errors
    ///
    /// `Busy` while another capture is processing.
    pub fn begin(&mut self, source: CaptureSource) -> Result<CaptureId, DomainError> {
        if self.status == DiagnosisStatus::Processing {
            return Err(DomainError::busy("Already processing an image")
                .with_detail("source", source.to_string()));
        }
        self.status.advance(DiagnosisStatus::Processing)?;
        let id = CaptureId::new();
        self.pending = Some(PendingCapture { id, source });
        self.result = None;
        Ok(id)
    }

    /// Publishes the result for `id`. Returns false if `id` is not pending.
    pub fn resolve(&mut self, id: CaptureId, result: DiagnosisResult) -> bool {
        if !self.is_pending(id) {
            return false;
        }
        self.status = DiagnosisStatus::Resolved;
        self.pending = None;
        self.result = Some(result);
        true
    }

    /// Drops the pending capture after a failed sample.
    pub fn fail(&mut self, id: CaptureId) -> bool {
        if !self.is_pending(id) {
            return false;
        }
        self.status = DiagnosisStatus::Idle;
        self.pending = None;
        true
    }

    fn is_pending(&self, id: CaptureId) -> bool {
        self.status == DiagnosisStatus::Processing && self.pending.map(|p| p.id) == Some(id)
    }
}
