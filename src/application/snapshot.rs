//! Read-only view of everything a rendering layer needs.

use serde::Serialize;

use crate::domain::advisory::{Alert, WeatherReport};
use crate::domain::diagnosis::{DiagnosisResult, DiagnosisStatus};
use crate::domain::foundation::Language;
use crate::domain::knowledge::{CropPanel, DatasetOrigin};
use crate::domain::location::LocationDisplay;
use crate::domain::navigation::{ModuleId, Phase};
use crate::domain::voice::{VoiceExchange, VoiceStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisSnapshot {
    pub status: DiagnosisStatus,
    /// `None` renders as "no result".
    pub result: Option<DiagnosisResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceSnapshot {
    pub status: VoiceStatus,
    pub prompt: &'static str,
    pub exchange: Option<VoiceExchange>,
}

/// Full engine state at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSnapshot {
    pub phase: Phase,
    /// The module on screen; `None` while setup is pending.
    pub active_module: Option<ModuleId>,
    /// Stored location, kept while setup is reopened.
    pub location: Option<LocationDisplay>,
    pub language: Language,
    pub dataset_origin: DatasetOrigin,
    pub crop_panel: Option<CropPanel>,
    pub diagnosis: DiagnosisSnapshot,
    pub voice: VoiceSnapshot,
    pub weather: Option<WeatherReport>,
    pub alerts: Vec<Alert>,
}
