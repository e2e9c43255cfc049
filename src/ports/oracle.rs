//! Oracle port - Stand-in for an inference or recognition model.
//!
//! The diagnosis and voice pipelines (and the notification scheduler) only ask
//! an oracle for "the next answer". Today the answers are sampled from fixed
//! tables; a real model can implement the same trait without touching the
//! pipeline state machines.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::advisory::{AlertTemplate, WeatherReading};
use crate::domain::diagnosis::DiagnosisResult;
use crate::domain::voice::VoiceExchange;

/// Port producing one sample per call.
#[async_trait]
pub trait Oracle<T>: Send + Sync {
    async fn sample(&self) -> Result<T, OracleError>;
}

/// Classifies a captured image.
pub type DiagnosisOracle = dyn Oracle<DiagnosisResult>;

/// Recognises a spoken question and answers it.
pub type VoiceOracle = dyn Oracle<VoiceExchange>;

/// Produces the next weather reading.
pub type WeatherOracle = dyn Oracle<WeatherReading>;

/// Produces the next advisory alert.
pub type AlertOracle = dyn Oracle<AlertTemplate>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The oracle has nothing to sample from.
    #[error("oracle table is empty")]
    EmptyTable,

    /// The backing model could not answer.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
}
