//! UpdateSink port - The rendering boundary.
//!
//! The engine describes every state change as a [`UiUpdate`]; a rendering
//! layer subscribes through this port and never reaches into engine state.

use serde::Serialize;

use crate::domain::advisory::{Alert, WeatherReport};
use crate::domain::diagnosis::{CaptureSource, DiagnosisResult};
use crate::domain::foundation::{AlertId, Language};
use crate::domain::knowledge::CropPanel;
use crate::domain::location::LocationDisplay;
use crate::domain::navigation::{ModuleId, Phase};
use crate::domain::voice::{VoiceExchange, VoiceStatus};

/// One observable change, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiUpdate {
    Navigation { phase: Phase, active_module: ModuleId },
    LocationChanged(LocationDisplay),
    LanguageChanged { language: Language },
    CropPanel(CropPanel),
    DiagnosisProcessing { source: CaptureSource },
    DiagnosisResolved(DiagnosisResult),
    DiagnosisFailed { reason: String },
    VoiceStatus { status: VoiceStatus },
    VoiceAnswered(VoiceExchange),
    WeatherRefreshed(WeatherReport),
    AlertRaised(Alert),
    AlertExpired { id: AlertId },
}

impl UiUpdate {
    /// Stable name of the variant, for filtering and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UiUpdate::Navigation { .. } => "navigation",
            UiUpdate::LocationChanged(_) => "location_changed",
            UiUpdate::LanguageChanged { .. } => "language_changed",
            UiUpdate::CropPanel(_) => "crop_panel",
            UiUpdate::DiagnosisProcessing { .. } => "diagnosis_processing",
            UiUpdate::DiagnosisResolved(_) => "diagnosis_resolved",
            UiUpdate::DiagnosisFailed { .. } => "diagnosis_failed",
            UiUpdate::VoiceStatus { .. } => "voice_status",
            UiUpdate::VoiceAnswered(_) => "voice_answered",
            UiUpdate::WeatherRefreshed(_) => "weather_refreshed",
            UiUpdate::AlertRaised(_) => "alert_raised",
            UiUpdate::AlertExpired { .. } => "alert_expired",
        }
    }
}

/// Port for delivering updates to the rendering layer.
///
/// `publish` is called while the engine holds the lock on the state it just
/// changed, which is what keeps delivery order equal to transition order.
/// Implementations must not block and must not call back into the engine.
pub trait UpdateSink: Send + Sync {
    fn publish(&self, update: UiUpdate);
}
