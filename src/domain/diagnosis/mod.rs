//! Image-based disease check: capture events, results and lifecycle.

mod capture;
mod state;

pub use capture::{CaptureEvent, CaptureSource, FileCapture};
pub use state::{DiagnosisResult, DiagnosisState, DiagnosisStatus, PendingCapture};
