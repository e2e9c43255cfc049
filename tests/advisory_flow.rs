//! Integration tests for the advisory engine.
//!
//! These tests drive the public `AppContext` API end-to-end:
//! 1. Knowledge base loads once, falling back to the built-in crops
//! 2. Location setup moves navigation to the dashboard
//! 3. Module selection gates the crop panel
//! 4. Diagnosis and voice pipelines publish results in transition order
//! 5. The scheduler raises and expires alerts in the background
//!
//! Uses scripted oracles and the in-memory sink; time is paused so the
//! simulated delays elapse deterministically.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time;

use farm_advisor::adapters::{
    FileDatasetSource, InMemoryUpdateSink, RecordingSpeechOutput, ScriptedOracle,
    UnconfiguredSource,
};
use farm_advisor::application::{AppContext, Collaborators};
use farm_advisor::config::AppConfig;
use farm_advisor::domain::advisory::{AlertKind, AlertTemplate, WeatherCondition, WeatherReading};
use farm_advisor::domain::diagnosis::{CaptureSource, DiagnosisResult, DiagnosisStatus, FileCapture};
use farm_advisor::domain::foundation::ErrorCode;
use farm_advisor::domain::knowledge::{CropDataset, DatasetOrigin, PriceTrend, Season};
use farm_advisor::domain::navigation::{ModuleId, Phase};
use farm_advisor::domain::voice::{VoiceExchange, VoiceStatus};
use farm_advisor::ports::{DatasetSource, SourceError, UiUpdate};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    ctx: AppContext,
    sink: Arc<InMemoryUpdateSink>,
    speech: Arc<RecordingSpeechOutput>,
    diagnosis: Arc<ScriptedOracle<DiagnosisResult>>,
    voice: Arc<ScriptedOracle<VoiceExchange>>,
}

fn leaf_blast() -> DiagnosisResult {
    DiagnosisResult::new(
        "Leaf Blast",
        92,
        "Apply Tricyclazole fungicide. Remove affected leaves.",
        "Ensure proper drainage and avoid overhead irrigation.",
    )
}

fn kharif_question() -> VoiceExchange {
    VoiceExchange::new(
        "What should I plant in kharif season?",
        "For kharif season, you can plant rice, cotton, sugarcane, or maize.",
    )
}

async fn harness_with_source(dataset: Arc<dyn DatasetSource>) -> Harness {
    let sink = Arc::new(InMemoryUpdateSink::new());
    let speech = Arc::new(RecordingSpeechOutput::new());
    let diagnosis = Arc::new(ScriptedOracle::always(leaf_blast()));
    let voice = Arc::new(ScriptedOracle::always(kharif_question()));

    let collaborators = Collaborators {
        dataset,
        diagnosis: diagnosis.clone(),
        voice: voice.clone(),
        weather: Arc::new(ScriptedOracle::always(WeatherReading {
            condition: WeatherCondition::PartlyCloudy,
            temperature_celsius: 26,
            humidity_percent: 65,
            wind_kmh: 12,
        })),
        alerts: Arc::new(ScriptedOracle::always(AlertTemplate::new(
            AlertKind::Success,
            "Scheme Alert",
            "PM-KISAN installment credited",
        ))),
        speech: speech.clone(),
        sink: sink.clone(),
    };

    let ctx = AppContext::create(AppConfig::default(), collaborators)
        .await
        .expect("default configuration is valid");

    Harness {
        ctx,
        sink,
        speech,
        diagnosis,
        voice,
    }
}

async fn harness() -> Harness {
    harness_with_source(Arc::new(UnconfiguredSource)).await
}

struct FailingSource;

#[async_trait]
impl DatasetSource for FailingSource {
    async fn fetch(&self) -> Result<CropDataset, SourceError> {
        Err(SourceError::parse("expected value at line 1 column 1"))
    }

    fn describe(&self) -> String {
        "https://example.invalid/crops.json".to_string()
    }
}

// =============================================================================
// Knowledge and navigation
// =============================================================================

#[tokio::test(start_paused = true)]
async fn fallback_setup_and_wheat_lookup() {
    let h = harness_with_source(Arc::new(FailingSource)).await;
    assert_eq!(h.ctx.knowledge().origin(), DatasetOrigin::Fallback);

    let display = h.ctx.complete_setup("punjab", "").unwrap();
    assert_eq!(display.district, "Main Area");
    assert_eq!(h.ctx.snapshot().active_module, Some(ModuleId::Dashboard));

    h.ctx.select_module("crops").unwrap();
    let wheat = h.ctx.lookup("wheat").unwrap();
    assert_eq!(wheat.season, Season::Rabi);
    assert_eq!(wheat.market_price.current, 2150.0);
    assert_eq!(wheat.market_price.change, "+2.5%");
    assert_eq!(wheat.market_price.trend(), PriceTrend::Positive);

    h.ctx.teardown().await;
}

#[tokio::test(start_paused = true)]
async fn fallback_rice_record() {
    let h = harness().await;
    let rice = h.ctx.lookup("rice").unwrap();
    assert_eq!(rice.season, Season::Kharif);
    assert_eq!(
        (rice.fertilizer.nitrogen, rice.fertilizer.phosphorus, rice.fertilizer.potassium),
        (120, 60, 40)
    );
    assert!(h.ctx.lookup("unknown-crop").unwrap_err().is(ErrorCode::CropNotFound));
    assert!(h.ctx.lookup("").is_err());
}

#[tokio::test(start_paused = true)]
async fn file_dataset_replaces_fallback() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
        file,
        r#"
crops:
  maize:
    name_hindi: "मक्का"
    season: Kharif
    sowing: "June - July"
    harvest: "September - October"
    soil_types: ["Loamy"]
    water_requirement: Moderate
    fertilizer: {{ N: 150, P: 75, K: 40 }}
    market_price: {{ current: 1962, change: "-0.8%" }}
"#
    )
    .unwrap();

    let h = harness_with_source(Arc::new(FileDatasetSource::new(file.path()))).await;
    assert_eq!(h.ctx.knowledge().origin(), DatasetOrigin::Remote);
    assert_eq!(h.ctx.lookup("maize").unwrap().market_price.trend(), PriceTrend::Negative);
    assert!(h.ctx.lookup("rice").is_err());
}

#[tokio::test(start_paused = true)]
async fn setup_updates_are_published_in_order() {
    let h = harness().await;
    h.ctx.complete_setup("maharashtra", "Pune").unwrap();
    h.ctx.select_module("prices").unwrap();
    h.ctx.return_to_dashboard().unwrap();

    let kinds: Vec<&str> = h.sink.updates().iter().map(UiUpdate::kind).collect();
    assert_eq!(
        kinds,
        vec!["location_changed", "navigation", "navigation", "navigation"]
    );
    assert_eq!(
        h.sink.last(),
        Some(UiUpdate::Navigation {
            phase: Phase::Ready,
            active_module: ModuleId::Dashboard,
        })
    );
}

#[tokio::test(start_paused = true)]
async fn failed_setup_changes_nothing() {
    let h = harness().await;
    assert!(h.ctx.complete_setup("", "Pune").is_err());
    assert!(h.ctx.complete_setup("atlantis", "").is_err());
    assert!(h.ctx.complete_setup("punjab", "Pune").is_err());

    let snapshot = h.ctx.snapshot();
    assert_eq!(snapshot.phase, Phase::SetupPending);
    assert_eq!(snapshot.location, None);
    assert!(h.sink.is_empty());
}

// =============================================================================
// Diagnosis pipeline
// =============================================================================

#[tokio::test(start_paused = true)]
async fn busy_capture_resolves_original_exactly_once() {
    let h = harness().await;

    h.ctx
        .upload_image(Some(FileCapture::new("leaf.jpg", vec![1, 2, 3])))
        .unwrap();
    let err = h.ctx.capture_photo().unwrap_err();
    assert!(err.is(ErrorCode::Busy));

    time::sleep(Duration::from_secs(3)).await;

    assert_eq!(h.diagnosis.calls(), 1);
    assert_eq!(
        h.sink.updates(),
        vec![
            UiUpdate::DiagnosisProcessing {
                source: CaptureSource::File
            },
            UiUpdate::DiagnosisResolved(leaf_blast()),
        ]
    );
    let snapshot = h.ctx.snapshot().diagnosis;
    assert_eq!(snapshot.status, DiagnosisStatus::Resolved);
    assert_eq!(snapshot.result.unwrap().confidence_label(), "92%");
}

// =============================================================================
// Voice pipeline
// =============================================================================

#[tokio::test(start_paused = true)]
async fn stop_during_listening_publishes_nothing() {
    let h = harness().await;

    h.ctx.open_voice();
    h.ctx.start_voice().unwrap();
    time::sleep(Duration::from_secs(2)).await;
    assert!(h.ctx.stop_voice());

    time::sleep(Duration::from_secs(5)).await;
    assert_eq!(h.ctx.snapshot().voice.status, VoiceStatus::Idle);
    assert!(!h.sink.has_update("voice_answered"));
    assert!(h.speech.utterances().is_empty());

    // A fresh session is independent of the cancelled one.
    h.ctx.start_voice().unwrap();
    time::sleep(Duration::from_millis(3_100)).await;
    assert_eq!(h.ctx.snapshot().voice.exchange, Some(kharif_question()));
    assert_eq!(h.voice.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn answer_is_spoken_in_current_language() {
    let h = harness().await;
    h.ctx.set_language("hi").unwrap();

    h.ctx.start_voice().unwrap();
    assert!(h.ctx.start_voice().is_none());
    time::sleep(Duration::from_secs(4)).await;

    let utterances = h.speech.utterances();
    assert_eq!(utterances.len(), 1);
    assert_eq!(utterances[0].language_tag, "hi-IN");
    assert_eq!(utterances[0].text, kharif_question().answer);
}

#[tokio::test(start_paused = true)]
async fn reopening_voice_hides_previous_answer() {
    let h = harness().await;
    h.ctx.start_voice().unwrap();
    time::sleep(Duration::from_secs(4)).await;
    assert!(h.ctx.snapshot().voice.exchange.is_some());

    h.ctx.close_voice();
    h.ctx.open_voice();
    let voice = h.ctx.snapshot().voice;
    assert_eq!(voice.status, VoiceStatus::Idle);
    assert_eq!(voice.exchange, None);
}

// =============================================================================
// Notification scheduler
// =============================================================================

#[tokio::test(start_paused = true)]
async fn scheduler_runs_independently_of_navigation() {
    let h = harness().await;

    time::sleep(Duration::from_millis(5_100)).await;
    assert!(h.ctx.snapshot().weather.is_none());
    assert!(h.ctx.snapshot().alerts.is_empty());

    // first weather refresh and first alert land together ten minutes in
    time::sleep(Duration::from_secs(600)).await;
    let snapshot = h.ctx.snapshot();
    assert_eq!(snapshot.phase, Phase::SetupPending);
    assert_eq!(snapshot.weather.unwrap().temperature_label(), "26°C");
    assert_eq!(snapshot.alerts.len(), 1);
    assert_eq!(snapshot.alerts[0].kind.icon(), "✅");

    time::sleep(Duration::from_secs(10)).await;
    assert!(h.ctx.snapshot().alerts.is_empty());
    assert!(h.sink.has_update("alert_expired"));
}
