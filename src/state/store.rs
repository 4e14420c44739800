//! In-process state store.

use super::{Action, AppState, StateContainer};
use crate::error::{Result, StateError};
use crate::schema::DefaultState;
use crate::subscriptions::{
    SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::{Revision, Section};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::debug;

/// The editor's state store.
///
/// Holds the current [`AppState`] behind a read-write lock, counts
/// dispatches as revisions and broadcasts every replaced section.
pub struct StateStore {
    state: RwLock<AppState>,
    revision: RwLock<Revision>,
    subscriptions: SubscriptionManager,
    /// Serializes dispatches so revisions and broadcasts stay in order.
    write_lock: Mutex<()>,
}

impl StateStore {
    /// Create a store holding the current schema defaults.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store holding the given state.
    pub fn with_state(state: AppState) -> Self {
        Self::with_subscriptions(state, SubscriptionManager::new())
    }

    /// Create a store with a preconfigured subscription manager.
    pub fn with_subscriptions(state: AppState, subscriptions: SubscriptionManager) -> Self {
        Self {
            state: RwLock::new(state),
            revision: RwLock::new(Revision::default()),
            subscriptions,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store from explicit defaults.
    pub fn from_defaults(defaults: &DefaultState) -> Self {
        Self::with_state(AppState::from_defaults(defaults))
    }

    /// Current revision (number of dispatches applied).
    pub fn revision(&self) -> Revision {
        *self.revision.read()
    }

    /// Clone of one section.
    pub fn section(&self, section: Section) -> Value {
        self.state.read().section(section).clone()
    }

    /// Serialize the whole state.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&*self.state.read())?)
    }

    /// Stop delivering events to a subscription.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.subscription_count()
    }

    fn apply(state: &mut AppState, action: Action) -> Result<()> {
        match action {
            Action::SetResume(value) => state.resume = value,
            Action::SetSettings(value) => state.settings = value,
            Action::ChangeSetting { field, value } => match &mut state.settings {
                Value::Object(settings) => {
                    settings.insert(field, value);
                }
                other => {
                    return Err(StateError::InvalidOperation(format!(
                        "cannot set settings field {:?} on non-object settings ({})",
                        field,
                        type_name(other)
                    )));
                }
            },
        }
        Ok(())
    }
}

impl StateContainer for StateStore {
    fn get_state(&self) -> AppState {
        self.state.read().clone()
    }

    fn dispatch(&self, action: Action) -> Result<Revision> {
        let _lock = self.write_lock.lock();

        let section = action.section();
        let updated = {
            let mut state = self.state.write();
            Self::apply(&mut state, action)?;
            state.section_mut(section).clone()
        };

        let revision = {
            let mut revision = self.revision.write();
            *revision = revision.next();
            *revision
        };

        debug!(%section, revision = revision.0, "dispatched");
        self.subscriptions
            .broadcast_section(section, revision, &updated);

        Ok(revision)
    }

    fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        self.subscriptions.subscribe(config)
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
