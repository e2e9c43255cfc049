//! Navigation state machine: setup phase plus the single active module.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::module_id::ModuleId;
use crate::domain::foundation::{DomainError, StateMachine, ValidationError};
use crate::domain::location::Location;

/// Whether the user still has to pick a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    SetupPending,
    Ready,
}

impl StateMachine for Phase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Phase::*;
        matches!(
            (self, target),
            (SetupPending, Ready) | (SetupPending, SetupPending) | (Ready, SetupPending)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Phase::*;
        match self {
            SetupPending => vec![Ready, SetupPending],
            Ready => vec![SetupPending],
        }
    }
}

/// Outcome of a module selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleChange {
    Changed { from: ModuleId, to: ModuleId },
    Unchanged(ModuleId),
    /// The requested id is not a known module.
    Ignored,
}

/// Phase, active module and the stored location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    phase: Phase,
    active_module: ModuleId,
    location: Location,
}

impl NavigationState {
    /// Fresh state: setup pending, no location.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn active_module(&self) -> ModuleId {
        self.active_module
    }

    /// The module to render, `None` while setup is pending.
    pub fn visible_module(&self) -> Option<ModuleId> {
        self.is_ready().then_some(self.active_module)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Stores the location and opens the dashboard.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless setup is pending
    /// - `ValidationFailed` if the location has no state; nothing changes
    pub fn complete_setup(&mut self, location: Location) -> Result<(), DomainError> {
        if self.phase != Phase::SetupPending {
            return Err(DomainError::invalid_transition("Setup is already complete"));
        }
        if !location.is_complete() {
            return Err(ValidationError::empty_field("state").into());
        }
        self.phase.advance(Phase::Ready)?;
        self.location = location;
        self.active_module = ModuleId::Dashboard;
        debug!(state = %self.location.state, district = %self.location.district, "Setup complete");
        Ok(())
    }

    /// Selects a module by its string id; unknown ids are ignored.
    pub fn select_module(&mut self, id: &str) -> Result<ModuleChange, DomainError> {
        self.require_ready()?;
        match id.parse::<ModuleId>() {
            Ok(module) => self.select(module),
            Err(_) => {
                debug!(module = id, "Ignoring unknown module");
                Ok(ModuleChange::Ignored)
            }
        }
    }

    /// Selects a known module.
    pub fn select(&mut self, module: ModuleId) -> Result<ModuleChange, DomainError> {
        self.require_ready()?;
        let from = self.active_module;
        if from == module {
            return Ok(ModuleChange::Unchanged(module));
        }
        self.active_module = module;
        debug!(%from, to = %module, "Module selected");
        Ok(ModuleChange::Changed { from, to: module })
    }

    /// Returns to the dashboard, reporting the module that was left.
    pub fn return_to_dashboard(&mut self) -> Result<ModuleId, DomainError> {
        self.require_ready()?;
        let previous = self.active_module;
        self.active_module = ModuleId::Dashboard;
        Ok(previous)
    }

    /// Goes back to location setup from any state. The location is kept.
    pub fn reopen_setup(&mut self) {
        self.phase = Phase::SetupPending;
        self.active_module = ModuleId::Dashboard;
        debug!("Setup reopened");
    }

    /// Replaces the stored location (district change).
    pub fn update_location(&mut self, location: Location) -> Result<(), DomainError> {
        if !location.is_complete() {
            return Err(ValidationError::empty_field("state").into());
        }
        self.location = location;
        Ok(())
    }

    fn require_ready(&self) -> Result<(), DomainError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(DomainError::invalid_transition(
                "Complete location setup first",
            ))
        }
    }
}
