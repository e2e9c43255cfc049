//! Advisory alerts and the board that holds them until they expire.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlertId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Warning,
    Info,
    Success,
}

impl AlertKind {
    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Warning => "⚠️",
            AlertKind::Success => "✅",
            AlertKind::Info => "ℹ️",
        }
    }
}

/// Alert content before it is raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertTemplate {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl AlertTemplate {
    pub fn new(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A raised alert with its expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub raised_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Alert {
    pub fn raise(template: AlertTemplate, ttl_ms: u64) -> Self {
        let raised_at = Timestamp::now();
        Self {
            id: AlertId::new(),
            kind: template.kind,
            title: template.title,
            message: template.message,
            raised_at,
            expires_at: raised_at.plus_millis(ttl_ms),
        }
    }
}

/// Alerts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
}

impl AlertBoard {
    pub fn push(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    /// Removes an alert; false if it was already gone.
    pub fn expire(&mut self, id: AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    pub fn active(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }
}
