//! NotificationScheduler - Background weather refreshes and advisory alerts.
//!
//! Two independent periodic triggers, each sampling its own oracle and
//! publishing the result to the update sink. Every alert is removed again
//! after the configured time-to-live.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `scheduler_warmup_ms` | 5s | Delay before the periodic timers start |
//! | `weather_interval_ms` | 5min | Weather refresh period; first refresh one period after warm-up |
//! | `alert_interval_ms` | 10min | Alert period; first alert one period after warm-up |
//! | `alert_ttl_ms` | 10s | How long an alert stays on the board |
//!
//! ## Lifecycle
//!
//! Started once by the application context and stopped only on teardown.
//! A stopped scheduler cannot be started again.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::deferred::cancelled;
use super::lock;
use crate::config::TimingConfig;
use crate::domain::advisory::{Alert, AlertBoard, WeatherReport};
use crate::domain::foundation::AlertId;
use crate::ports::{AlertOracle, UiUpdate, UpdateSink, WeatherOracle};

/// State shared between the scheduler handle and its background tasks.
struct Shared {
    weather_oracle: Arc<WeatherOracle>,
    alert_oracle: Arc<AlertOracle>,
    sink: Arc<dyn UpdateSink>,
    timing: TimingConfig,
    weather: Mutex<Option<WeatherReport>>,
    alerts: Mutex<AlertBoard>,
}

pub struct NotificationScheduler {
    shared: Arc<Shared>,
    shutdown: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl NotificationScheduler {
    pub fn new(
        weather_oracle: Arc<WeatherOracle>,
        alert_oracle: Arc<AlertOracle>,
        sink: Arc<dyn UpdateSink>,
        timing: TimingConfig,
    ) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            shared: Arc::new(Shared {
                weather_oracle,
                alert_oracle,
                sink,
                timing,
                weather: Mutex::new(None),
                alerts: Mutex::new(AlertBoard::default()),
            }),
            shutdown,
            handle: Mutex::new(None),
        }
    }

    /// Spawns the background loop. Returns false if it was already started
    /// (or has been stopped).
    pub fn start(&self) -> bool {
        let mut handle = lock(&self.handle);
        if handle.is_some() || *self.shutdown.borrow() {
            return false;
        }
        let shared = Arc::clone(&self.shared);
        let shutdown = self.shutdown.subscribe();
        *handle = Some(tokio::spawn(run(shared, shutdown)));
        info!(
            warmup_ms = self.shared.timing.scheduler_warmup_ms,
            "Notification scheduler started"
        );
        true
    }

    pub fn is_running(&self) -> bool {
        lock(&self.handle)
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Signals shutdown and waits for the loop to exit. Pending alert
    /// expiries are dropped.
    pub async fn stop(&self) {
        self.shutdown.send_replace(true);
        let handle = lock(&self.handle).take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!(error = %err, "Notification scheduler task ended abnormally");
            }
            info!("Notification scheduler stopped");
        }
    }

    /// Latest weather report, if any refresh has happened.
    pub fn weather(&self) -> Option<WeatherReport> {
        lock(&self.shared.weather).clone()
    }

    /// Alerts that have not expired yet, oldest first.
    pub fn alerts(&self) -> Vec<Alert> {
        lock(&self.shared.alerts).active().to_vec()
    }

    /// Runs one weather refresh outside the periodic loop.
    pub async fn refresh_weather(&self) -> Option<WeatherReport> {
        self.shared.refresh_weather().await
    }

    /// Raises one alert outside the periodic loop.
    pub async fn raise_alert(&self) -> Option<Alert> {
        Shared::raise_alert(&self.shared, self.shutdown.subscribe()).await
    }
}

async fn run(shared: Arc<Shared>, mut shutdown: watch::Receiver<bool>) {
    tokio::select! {
        _ = cancelled(&mut shutdown) => return,
        _ = time::sleep(shared.timing.scheduler_warmup()) => {}
    }
    debug!("Scheduler warm-up elapsed");

    let mut weather = periodic(shared.timing.weather_interval());
    let mut alerts = periodic(shared.timing.alert_interval());

    loop {
        tokio::select! {
            biased;

            _ = cancelled(&mut shutdown) => {
                debug!("Scheduler loop exiting");
                return;
            }

            _ = weather.tick() => {
                shared.refresh_weather().await;
            }

            _ = alerts.tick() => {
                Shared::raise_alert(&shared, shutdown.clone()).await;
            }
        }
    }
}

/// First tick one full period from now, not immediately.
fn periodic(period: Duration) -> Interval {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

impl Shared {
    async fn refresh_weather(&self) -> Option<WeatherReport> {
        match self.weather_oracle.sample().await {
            Ok(reading) => {
                let report = WeatherReport::observe(reading);
                let mut weather = lock(&self.weather);
                *weather = Some(report.clone());
                debug!(condition = %report.reading.condition, "Weather refreshed");
                self.sink.publish(UiUpdate::WeatherRefreshed(report.clone()));
                Some(report)
            }
            Err(err) => {
                warn!(error = %err, "Weather oracle failed");
                None
            }
        }
    }

    async fn raise_alert(
        shared: &Arc<Self>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Option<Alert> {
        let template = match shared.alert_oracle.sample().await {
            Ok(template) => template,
            Err(err) => {
                warn!(error = %err, "Alert oracle failed");
                return None;
            }
        };

        let alert = Alert::raise(template, shared.timing.alert_ttl_ms);
        {
            let mut board = lock(&shared.alerts);
            board.push(alert.clone());
            debug!(alert_id = %alert.id, title = %alert.title, "Alert raised");
            shared.sink.publish(UiUpdate::AlertRaised(alert.clone()));
        }

        let expiring = Arc::clone(shared);
        let id = alert.id;
        let ttl = shared.timing.alert_ttl();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled(&mut shutdown) => {}
                _ = time::sleep(ttl) => expiring.expire_alert(id),
            }
        });

        Some(alert)
    }

    fn expire_alert(&self, id: AlertId) {
        let mut board = lock(&self.alerts);
        if board.expire(id) {
            debug!(alert_id = %id, "Alert expired");
            self.sink.publish(UiUpdate::AlertExpired { id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryUpdateSink, ScriptedOracle};
    use crate::domain::advisory::{AlertKind, AlertTemplate, WeatherCondition, WeatherReading};

    fn sunny() -> WeatherReading {
        WeatherReading {
            condition: WeatherCondition::Sunny,
            temperature_celsius: 28,
            humidity_percent: 45,
            wind_kmh: 8,
        }
    }

    fn market_update() -> AlertTemplate {
        AlertTemplate::new(AlertKind::Info, "Market Update", "Wheat prices up 2.5%")
    }

    fn scheduler() -> (NotificationScheduler, Arc<InMemoryUpdateSink>) {
        let sink = Arc::new(InMemoryUpdateSink::new());
        let scheduler = NotificationScheduler::new(
            Arc::new(ScriptedOracle::always(sunny())),
            Arc::new(ScriptedOracle::always(market_update())),
            sink.clone(),
            TimingConfig::default(),
        );
        (scheduler, sink)
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_published_during_warmup() {
        let (scheduler, sink) = scheduler();
        assert!(scheduler.start());

        time::sleep(Duration::from_millis(4_900)).await;
        assert!(sink.is_empty());
        assert!(scheduler.weather().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_published_right_after_warmup() {
        let (scheduler, sink) = scheduler();
        scheduler.start();

        time::sleep(Duration::from_millis(5_100)).await;
        assert_eq!(sink.count_of("weather_refreshed"), 0);
        assert_eq!(sink.count_of("alert_raised"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn first_refresh_and_alert_one_period_after_warmup() {
        let (scheduler, sink) = scheduler();
        scheduler.start();

        // warm-up + 5 min
        time::sleep(Duration::from_secs(5 + 300 + 1)).await;
        assert_eq!(sink.count_of("weather_refreshed"), 1);
        assert_eq!(sink.count_of("alert_raised"), 0);
        assert_eq!(scheduler.weather().unwrap().temperature_label(), "28°C");

        // warm-up + 10 min
        time::sleep(Duration::from_secs(300)).await;
        assert_eq!(sink.count_of("weather_refreshed"), 2);
        assert_eq!(sink.count_of("alert_raised"), 1);
        assert_eq!(scheduler.alerts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn alerts_expire_after_ttl() {
        let (scheduler, sink) = scheduler();
        scheduler.start();

        time::sleep(Duration::from_secs(5 + 600 + 1)).await;
        let raised = scheduler.alerts()[0].id;

        time::sleep(Duration::from_secs(10)).await;
        assert!(scheduler.alerts().is_empty());
        assert_eq!(
            sink.updates_of("alert_expired"),
            vec![UiUpdate::AlertExpired { id: raised }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn weather_refreshes_every_period() {
        let (scheduler, sink) = scheduler();
        scheduler.start();

        // warm-up, then ticks at 5, 10, 15 and 20 minutes
        time::sleep(Duration::from_secs(5 + 1_200 + 1)).await;
        assert_eq!(sink.count_of("weather_refreshed"), 4);
        assert_eq!(sink.count_of("alert_raised"), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn start_only_once() {
        let (scheduler, _sink) = scheduler();
        assert!(scheduler.start());
        assert!(!scheduler.start());
        assert!(scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_loop_and_prevents_restart() {
        let (scheduler, sink) = scheduler();
        scheduler.start();
        scheduler.stop().await;

        assert!(!scheduler.is_running());
        assert!(!scheduler.start());

        time::sleep(Duration::from_secs(60)).await;
        assert!(sink.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_alert_goes_through_the_board() {
        let (scheduler, sink) = scheduler();

        let alert = scheduler.raise_alert().await.unwrap();
        assert_eq!(alert.title, "Market Update");
        assert_eq!(scheduler.alerts(), vec![alert]);
        assert!(sink.has_update("alert_raised"));
    }
}
