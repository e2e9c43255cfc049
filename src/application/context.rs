//! AppContext - The single owned engine instance.
//!
//! Created once with its collaborators and torn down explicitly. Every
//! user-facing control maps onto one method here; `snapshot` is the query
//! a rendering layer uses to draw the whole screen.

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use super::diagnosis::DiagnosisPipeline;
use super::knowledge::load_knowledge_base;
use super::lock;
use super::scheduler::NotificationScheduler;
use super::snapshot::AppSnapshot;
use super::voice::VoicePipeline;
use crate::config::{AppConfig, ConfigError};
use crate::domain::diagnosis::{CaptureEvent, FileCapture};
use crate::domain::foundation::{CaptureId, DomainError, Language, ListeningId, ValidationError};
use crate::domain::knowledge::{CropPanel, CropRecord, CropView, KnowledgeBase, PriceBoard};
use crate::domain::location::{DistrictOption, LocationDisplay, LocationResolver, StateEntry};
use crate::domain::navigation::{ModuleChange, ModuleId, NavigationState};
use crate::ports::{
    AlertOracle, DatasetSource, DiagnosisOracle, SpeechOutput, UiUpdate, UpdateSink, VoiceOracle,
    WeatherOracle,
};

/// Everything the engine talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub dataset: Arc<dyn DatasetSource>,
    pub diagnosis: Arc<DiagnosisOracle>,
    pub voice: Arc<VoiceOracle>,
    pub weather: Arc<WeatherOracle>,
    pub alerts: Arc<AlertOracle>,
    pub speech: Arc<dyn SpeechOutput>,
    pub sink: Arc<dyn UpdateSink>,
}

pub struct AppContext {
    knowledge: KnowledgeBase,
    resolver: LocationResolver,
    navigation: Mutex<NavigationState>,
    language: Arc<Mutex<Language>>,
    crop_panel: Mutex<Option<CropPanel>>,
    diagnosis: DiagnosisPipeline,
    voice: VoicePipeline,
    scheduler: NotificationScheduler,
    sink: Arc<dyn UpdateSink>,
}

impl AppContext {
    /// Loads the knowledge base (once, with fallback) and starts the
    /// notification scheduler.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration does not validate.
    pub async fn create(config: AppConfig, collaborators: Collaborators) -> Result<Self, ConfigError> {
        config.validate()?;
        let language = config.app.language()?;
        let knowledge = load_knowledge_base(collaborators.dataset.as_ref()).await;

        let language = Arc::new(Mutex::new(language));
        let diagnosis = DiagnosisPipeline::new(
            collaborators.diagnosis,
            collaborators.sink.clone(),
            config.timing.clone(),
        );
        let voice = VoicePipeline::new(
            collaborators.voice,
            collaborators.sink.clone(),
            collaborators.speech,
            language.clone(),
            config.timing.voice_delay(),
        );
        let scheduler = NotificationScheduler::new(
            collaborators.weather,
            collaborators.alerts,
            collaborators.sink.clone(),
            config.timing.clone(),
        );

        let context = Self {
            knowledge,
            resolver: LocationResolver::new(),
            navigation: Mutex::new(NavigationState::new()),
            language,
            crop_panel: Mutex::new(None),
            diagnosis,
            voice,
            scheduler,
            sink: collaborators.sink,
        };
        context.scheduler.start();
        info!(
            crops = context.knowledge.len(),
            origin = ?context.knowledge.origin(),
            "Application context created"
        );
        Ok(context)
    }

    /// Stops the scheduler and drops pending pipeline work.
    pub async fn teardown(self) {
        self.voice.shutdown();
        self.diagnosis.shutdown();
        self.scheduler.stop().await;
        info!("Application context torn down");
    }

    // ════════════════════════════════════════════════════════════════════════
    // Location setup
    // ════════════════════════════════════════════════════════════════════════

    pub fn states(&self) -> &'static [StateEntry] {
        self.resolver.catalog().states()
    }

    /// Districts of a state; empty for an unknown state.
    pub fn districts(&self, state_id: &str) -> Vec<DistrictOption> {
        self.resolver.district_options(state_id)
    }

    /// Normalises the selection and moves to the dashboard.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` without a state, for an unknown state, or for a
    ///   district outside the state; navigation is unchanged
    /// - `InvalidStateTransition` if setup is already complete
    pub fn complete_setup(&self, state_id: &str, district: &str) -> Result<LocationDisplay, DomainError> {
        let location = self.resolver.normalize(state_id, district)?;
        let shown = self.resolver.display(&location);

        let mut navigation = lock(&self.navigation);
        navigation.complete_setup(location)?;
        info!(location = %shown.label(), "Location set");
        self.sink.publish(UiUpdate::LocationChanged(shown.clone()));
        self.publish_navigation(&navigation);
        Ok(shown)
    }

    /// Re-normalises a district against the stored state.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` if no state is stored or the district is unknown.
    pub fn change_district(&self, district: &str) -> Result<LocationDisplay, DomainError> {
        let mut navigation = lock(&self.navigation);
        let state_id = navigation.location().state.clone();
        if state_id.is_empty() {
            return Err(ValidationError::empty_field("state").into());
        }
        let location = self.resolver.normalize(&state_id, district)?;
        let shown = self.resolver.display(&location);
        navigation.update_location(location)?;
        debug!(location = %shown.label(), "District changed");
        self.sink.publish(UiUpdate::LocationChanged(shown.clone()));
        Ok(shown)
    }

    /// The settings action: back to location setup, location kept.
    pub fn reopen_setup(&self) {
        let left = {
            let mut navigation = lock(&self.navigation);
            let left = navigation.active_module();
            navigation.reopen_setup();
            self.publish_navigation(&navigation);
            left
        };
        self.on_module_left(left);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Navigation
    // ════════════════════════════════════════════════════════════════════════

    /// Selects a module by id. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` while setup is pending.
    pub fn select_module(&self, module_id: &str) -> Result<ModuleChange, DomainError> {
        let change = {
            let mut navigation = lock(&self.navigation);
            let change = navigation.select_module(module_id)?;
            if let ModuleChange::Changed { .. } = change {
                self.publish_navigation(&navigation);
            }
            change
        };

        if let ModuleChange::Changed { from, to } = change {
            self.on_module_left(from);
            if to == ModuleId::Voice {
                self.voice.reset();
            }
        }
        Ok(change)
    }

    /// # Errors
    ///
    /// `InvalidStateTransition` while setup is pending.
    pub fn return_to_dashboard(&self) -> Result<ModuleId, DomainError> {
        let left = {
            let mut navigation = lock(&self.navigation);
            let left = navigation.return_to_dashboard()?;
            self.publish_navigation(&navigation);
            left
        };
        self.on_module_left(left);
        Ok(left)
    }

    pub fn set_language(&self, code: &str) -> Result<Language, DomainError> {
        let language: Language = code.parse()?;
        let mut current = lock(&self.language);
        *current = language;
        debug!(%language, "Language changed");
        self.sink.publish(UiUpdate::LanguageChanged { language });
        Ok(language)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Crop knowledge
    // ════════════════════════════════════════════════════════════════════════

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Point lookup; `CropNotFound` for unknown or empty ids.
    pub fn lookup(&self, crop_id: &str) -> Result<&CropRecord, DomainError> {
        self.knowledge.lookup(crop_id)
    }

    /// Shows a crop in the crops module, or its empty state.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` unless the crops module is open.
    pub fn select_crop(&self, crop_id: &str) -> Result<CropPanel, DomainError> {
        if lock(&self.navigation).visible_module() != Some(ModuleId::Crops) {
            return Err(DomainError::invalid_transition("Open the crops module first"));
        }

        let panel = match self.knowledge.lookup(crop_id) {
            Ok(record) => CropPanel::Details(CropView::from_record(crop_id, record)),
            Err(_) => {
                debug!(crop_id, "No data for crop");
                CropPanel::NoData {
                    crop_id: crop_id.to_string(),
                }
            }
        };

        let mut current = lock(&self.crop_panel);
        *current = Some(panel.clone());
        self.sink.publish(UiUpdate::CropPanel(panel.clone()));
        Ok(panel)
    }

    pub fn price_board(&self) -> PriceBoard {
        PriceBoard::build(&self.knowledge)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Diagnosis
    // ════════════════════════════════════════════════════════════════════════

    /// # Errors
    ///
    /// `Busy` while a capture is processing.
    pub fn capture_photo(&self) -> Result<CaptureId, DomainError> {
        self.diagnosis.submit(CaptureEvent::Camera)
    }

    /// # Errors
    ///
    /// - `ValidationFailed` when no file (or an empty file) was selected
    /// - `Busy` while a capture is processing
    pub fn upload_image(&self, file: Option<FileCapture>) -> Result<CaptureId, DomainError> {
        let event = CaptureEvent::from_upload(file)?;
        self.diagnosis.submit(event)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Voice
    // ════════════════════════════════════════════════════════════════════════

    /// Opens the assistant with a clean `Idle` state.
    pub fn open_voice(&self) {
        self.voice.reset();
    }

    /// `None` when already listening.
    pub fn start_voice(&self) -> Option<ListeningId> {
        self.voice.start()
    }

    pub fn stop_voice(&self) -> bool {
        self.voice.stop()
    }

    /// Closing the assistant abandons a pending listen.
    pub fn close_voice(&self) {
        self.voice.stop();
    }

    // ════════════════════════════════════════════════════════════════════════
    // Query
    // ════════════════════════════════════════════════════════════════════════

    pub fn snapshot(&self) -> AppSnapshot {
        let (phase, active_module, location) = {
            let navigation = lock(&self.navigation);
            let location = navigation
                .location()
                .is_complete()
                .then(|| self.resolver.display(navigation.location()));
            (navigation.phase(), navigation.visible_module(), location)
        };

        AppSnapshot {
            phase,
            active_module,
            location,
            language: *lock(&self.language),
            dataset_origin: self.knowledge.origin(),
            crop_panel: lock(&self.crop_panel).clone(),
            diagnosis: self.diagnosis.snapshot(),
            voice: self.voice.snapshot(),
            weather: self.scheduler.weather(),
            alerts: self.scheduler.alerts(),
        }
    }

    pub fn scheduler(&self) -> &NotificationScheduler {
        &self.scheduler
    }

    fn publish_navigation(&self, navigation: &NavigationState) {
        self.sink.publish(UiUpdate::Navigation {
            phase: navigation.phase(),
            active_module: navigation.active_module(),
        });
    }

    fn on_module_left(&self, module: ModuleId) {
        if module == ModuleId::Voice {
            self.voice.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemoryUpdateSink, RecordingSpeechOutput, ScriptedOracle, UnconfiguredSource,
    };
    use crate::domain::advisory::{AlertKind, AlertTemplate, WeatherCondition, WeatherReading};
    use crate::domain::diagnosis::DiagnosisResult;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::knowledge::{DatasetOrigin, PriceTrend};
    use crate::domain::navigation::Phase;
    use crate::domain::voice::{VoiceExchange, VoiceStatus};
    use std::time::Duration;
    use tokio::time;

    async fn context() -> (AppContext, Arc<InMemoryUpdateSink>) {
        let sink = Arc::new(InMemoryUpdateSink::new());
        let collaborators = Collaborators {
            dataset: Arc::new(UnconfiguredSource),
            diagnosis: Arc::new(ScriptedOracle::always(DiagnosisResult::new(
                "Leaf Blast",
                92,
                "Tricyclazole",
                "Drainage",
            ))),
            voice: Arc::new(ScriptedOracle::always(VoiceExchange::new(
                "Current wheat price?",
                "₹2,150 per quintal",
            ))),
            weather: Arc::new(ScriptedOracle::always(WeatherReading {
                condition: WeatherCondition::Rainy,
                temperature_celsius: 24,
                humidity_percent: 80,
                wind_kmh: 15,
            })),
            alerts: Arc::new(ScriptedOracle::always(AlertTemplate::new(
                AlertKind::Warning,
                "Weather Alert",
                "Heavy rainfall expected",
            ))),
            speech: Arc::new(RecordingSpeechOutput::new()),
            sink: sink.clone(),
        };
        let context = AppContext::create(AppConfig::default(), collaborators)
            .await
            .unwrap();
        (context, sink)
    }

    #[tokio::test(start_paused = true)]
    async fn starts_pending_with_fallback_dataset() {
        let (ctx, _sink) = context().await;
        let snapshot = ctx.snapshot();

        assert_eq!(snapshot.phase, Phase::SetupPending);
        assert_eq!(snapshot.active_module, None);
        assert_eq!(snapshot.location, None);
        assert_eq!(snapshot.dataset_origin, DatasetOrigin::Fallback);
        assert!(ctx.scheduler().is_running());
        ctx.teardown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn setup_without_state_leaves_navigation_unchanged() {
        let (ctx, sink) = context().await;

        let err = ctx.complete_setup("", "").unwrap_err();
        assert!(err.is(ErrorCode::ValidationFailed));
        assert_eq!(ctx.snapshot().phase, Phase::SetupPending);
        assert!(sink.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn setup_with_state_only_shows_main_area() {
        let (ctx, sink) = context().await;

        let display = ctx.complete_setup("punjab", "").unwrap();
        assert_eq!(display.district, "Main Area");

        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.phase, Phase::Ready);
        assert_eq!(snapshot.active_module, Some(ModuleId::Dashboard));
        assert_eq!(
            sink.last(),
            Some(UiUpdate::Navigation {
                phase: Phase::Ready,
                active_module: ModuleId::Dashboard,
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn navigation_requires_setup() {
        let (ctx, _sink) = context().await;

        assert!(ctx
            .select_module("crops")
            .unwrap_err()
            .is(ErrorCode::InvalidStateTransition));
        assert!(ctx.return_to_dashboard().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_module_is_ignored() {
        let (ctx, _sink) = context().await;
        ctx.complete_setup("punjab", "").unwrap();
        ctx.select_module("prices").unwrap();

        assert_eq!(ctx.select_module("market").unwrap(), ModuleChange::Ignored);
        assert_eq!(ctx.snapshot().active_module, Some(ModuleId::Prices));
    }

    #[tokio::test(start_paused = true)]
    async fn reopen_setup_keeps_location() {
        let (ctx, _sink) = context().await;
        ctx.complete_setup("punjab", "Ludhiana").unwrap();
        ctx.select_module("crops").unwrap();

        ctx.reopen_setup();
        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.phase, Phase::SetupPending);
        assert_eq!(snapshot.active_module, None);
        assert_eq!(snapshot.location.unwrap().district, "Ludhiana");
    }

    #[tokio::test(start_paused = true)]
    async fn change_district_uses_stored_state() {
        let (ctx, _sink) = context().await;
        assert!(ctx.change_district("Ludhiana").is_err());

        ctx.complete_setup("punjab", "").unwrap();
        let display = ctx.change_district("Amritsar").unwrap();
        assert_eq!(display.label(), "Amritsar, Punjab");
    }

    #[tokio::test(start_paused = true)]
    async fn location_changes_are_published() {
        let (ctx, sink) = context().await;
        let set = ctx.complete_setup("punjab", "Ludhiana").unwrap();
        let changed = ctx.change_district("Amritsar").unwrap();

        assert_eq!(
            sink.updates_of("location_changed"),
            vec![
                UiUpdate::LocationChanged(set),
                UiUpdate::LocationChanged(changed),
            ]
        );
        ctx.teardown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn crop_panel_shows_details_or_empty_state() {
        let (ctx, _sink) = context().await;
        ctx.complete_setup("punjab", "").unwrap();
        assert!(ctx.select_crop("wheat").is_err());

        ctx.select_module("crops").unwrap();
        match ctx.select_crop("wheat").unwrap() {
            CropPanel::Details(view) => {
                assert_eq!(view.season, "Rabi");
                assert_eq!(view.price, "₹2,150/quintal");
                assert_eq!(view.trend, PriceTrend::Positive);
            }
            other => panic!("expected details, got {:?}", other),
        }

        let panel = ctx.select_crop("unknown-crop").unwrap();
        assert!(panel.is_empty());
        assert_eq!(ctx.snapshot().crop_panel, Some(panel));
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_voice_module_cancels_listening() {
        let (ctx, sink) = context().await;
        ctx.complete_setup("punjab", "").unwrap();
        ctx.select_module("voice").unwrap();
        ctx.start_voice().unwrap();

        ctx.return_to_dashboard().unwrap();
        time::sleep(Duration::from_secs(4)).await;

        assert_eq!(ctx.snapshot().voice.status, VoiceStatus::Idle);
        assert!(!sink.has_update("voice_answered"));
    }

    #[tokio::test(start_paused = true)]
    async fn language_change_is_published() {
        let (ctx, sink) = context().await;

        assert_eq!(ctx.set_language("hi").unwrap(), Language::Hindi);
        assert!(ctx.set_language("fr").is_err());
        assert_eq!(ctx.snapshot().language, Language::Hindi);
        assert_eq!(sink.count_of("language_changed"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn upload_without_file_is_rejected() {
        let (ctx, _sink) = context().await;
        let err = ctx.upload_image(None).unwrap_err();
        assert!(err.is(ErrorCode::ValidationFailed));
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_stops_scheduler() {
        let (ctx, sink) = context().await;
        ctx.teardown().await;

        time::sleep(Duration::from_secs(30)).await;
        assert!(!sink.has_update("weather_refreshed"));
    }
}
