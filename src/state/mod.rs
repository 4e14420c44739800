//! Application state container.
//!
//! The editor's state is split into independently replaceable sections.
//! Reconciliation and the save/load path only see the [`StateContainer`]
//! trait, so a host can plug in its own store and tests can record
//! dispatches.

mod store;

pub use store::StateStore;

use crate::error::Result;
use crate::schema::DefaultState;
use crate::subscriptions::{SubscriptionConfig, SubscriptionHandle};
use crate::types::{Revision, Section};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full application state, serialized as `{"resume": .., "settings": ..}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub resume: Value,
    pub settings: Value,
}

impl AppState {
    /// State of a fresh editor.
    pub fn from_defaults(defaults: &DefaultState) -> Self {
        Self {
            resume: defaults.resume.clone(),
            settings: defaults.settings.clone(),
        }
    }

    /// Value of one section.
    pub fn section(&self, section: Section) -> &Value {
        match section {
            Section::Resume => &self.resume,
            Section::Settings => &self.settings,
        }
    }

    pub(crate) fn section_mut(&mut self, section: Section) -> &mut Value {
        match section {
            Section::Resume => &mut self.resume,
            Section::Settings => &mut self.settings,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_defaults(DefaultState::current())
    }
}

/// A state change request.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace the whole resume section.
    SetResume(Value),
    /// Replace the whole settings section.
    SetSettings(Value),
    /// Set one top-level settings field.
    ChangeSetting { field: String, value: Value },
}

impl Action {
    /// Section this action writes to.
    pub fn section(&self) -> Section {
        match self {
            Action::SetResume(_) => Section::Resume,
            Action::SetSettings(_) | Action::ChangeSetting { .. } => Section::Settings,
        }
    }
}

/// Read, dispatch and subscribe access to application state.
pub trait StateContainer: Send + Sync {
    /// Snapshot of the current state.
    fn get_state(&self) -> AppState;

    /// Apply an action, returning the revision it produced.
    fn dispatch(&self, action: Action) -> Result<Revision>;

    /// Subscribe to section changes.
    fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle;
}
