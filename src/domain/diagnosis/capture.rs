//! Capture events handed over by the capture-input collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// An uploaded image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCapture {
    pub name: String,
    pub payload: Vec<u8>,
}

impl FileCapture {
    pub fn new(name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// A simulated camera shot or an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    Camera,
    File(FileCapture),
}

/// Kind of capture, which only decides the simulated processing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSource {
    Camera,
    File,
}

impl fmt::Display for CaptureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureSource::Camera => write!(f, "camera"),
            CaptureSource::File => write!(f, "file"),
        }
    }
}

impl CaptureEvent {
    pub fn source(&self) -> CaptureSource {
        match self {
            CaptureEvent::Camera => CaptureSource::Camera,
            CaptureEvent::File(_) => CaptureSource::File,
        }
    }

    /// Builds an upload event from an optional file selection.
    pub fn from_upload(file: Option<FileCapture>) -> Result<Self, ValidationError> {
        let file = file.ok_or_else(|| ValidationError::empty_field("file"))?;
        let event = CaptureEvent::File(file);
        event.validate()?;
        Ok(event)
    }

    /// Rejects an upload without content.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            CaptureEvent::Camera => Ok(()),
            CaptureEvent::File(file) if file.payload.is_empty() => Err(
                ValidationError::invalid_format("file", format!("'{}' is empty", file.name)),
            ),
            CaptureEvent::File(_) => Ok(()),
        }
    }
}
