//! Simulated delays and background periods

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::diagnosis::CaptureSource;

/// All durations are in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_camera_ms")]
    pub camera_ms: u64,

    #[serde(default = "default_upload_ms")]
    pub upload_ms: u64,

    #[serde(default = "default_voice_ms")]
    pub voice_ms: u64,

    /// Delay between readiness and the first scheduler period
    #[serde(default = "default_scheduler_warmup_ms")]
    pub scheduler_warmup_ms: u64,

    #[serde(default = "default_weather_interval_ms")]
    pub weather_interval_ms: u64,

    #[serde(default = "default_alert_interval_ms")]
    pub alert_interval_ms: u64,

    /// How long a raised alert stays on screen
    #[serde(default = "default_alert_ttl_ms")]
    pub alert_ttl_ms: u64,
}

impl TimingConfig {
    /// Processing delay for a capture source
    pub fn capture_delay(&self, source: CaptureSource) -> Duration {
        match source {
            CaptureSource::Camera => Duration::from_millis(self.camera_ms),
            CaptureSource::File => Duration::from_millis(self.upload_ms),
        }
    }

    pub fn voice_delay(&self) -> Duration {
        Duration::from_millis(self.voice_ms)
    }

    pub fn scheduler_warmup(&self) -> Duration {
        Duration::from_millis(self.scheduler_warmup_ms)
    }

    pub fn weather_interval(&self) -> Duration {
        Duration::from_millis(self.weather_interval_ms)
    }

    pub fn alert_interval(&self) -> Duration {
        Duration::from_millis(self.alert_interval_ms)
    }

    pub fn alert_ttl(&self) -> Duration {
        Duration::from_millis(self.alert_ttl_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("camera_ms", self.camera_ms),
            ("upload_ms", self.upload_ms),
            ("voice_ms", self.voice_ms),
        ] {
            if value == 0 || value > 9_999 {
                return Err(ValidationError::InvalidDelay(name));
            }
        }
        for (name, value) in [
            ("weather_interval_ms", self.weather_interval_ms),
            ("alert_interval_ms", self.alert_interval_ms),
            ("alert_ttl_ms", self.alert_ttl_ms),
        ] {
            if value == 0 {
                return Err(ValidationError::InvalidPeriod(name));
            }
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            camera_ms: default_camera_ms(),
            upload_ms: default_upload_ms(),
            voice_ms: default_voice_ms(),
            scheduler_warmup_ms: default_scheduler_warmup_ms(),
            weather_interval_ms: default_weather_interval_ms(),
            alert_interval_ms: default_alert_interval_ms(),
            alert_ttl_ms: default_alert_ttl_ms(),
        }
    }
}

fn default_camera_ms() -> u64 {
    2_000
}

fn default_upload_ms() -> u64 {
    1_500
}

fn default_voice_ms() -> u64 {
    3_000
}

fn default_scheduler_warmup_ms() -> u64 {
    5_000
}

fn default_weather_interval_ms() -> u64 {
    300_000
}

fn default_alert_interval_ms() -> u64 {
    600_000
}

fn default_alert_ttl_ms() -> u64 {
    10_000
}
