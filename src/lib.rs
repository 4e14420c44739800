//! # Resume State
//!
//! State handling behind a resume editor's control bar: saving the current
//! state next to the rendered document, loading it back, and keeping older
//! saved files usable as the schema grows.
//!
//! ## Core Concepts
//!
//! - **Sections**: State is split into `resume` and `settings`, each replaced as a whole
//! - **Defaults**: The current schema's blank state, built from typed structs
//! - **Reconciliation**: Loaded sections are deep-merged over the defaults
//! - **Container**: A store with get/dispatch/subscribe that hosts can swap out
//!
//! ## Example
//!
//! ```ignore
//! use resume_state::{ControlBar, ControlBarConfig, StateStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(StateStore::new());
//! let bar = ControlBar::new(ControlBarConfig::default(), store.clone(), |state: &AppState| {
//!     render_pdf(state)
//! });
//!
//! // Writes "Resume.pdf" and "Resume.pdf.json"
//! let report = bar.save(Path::new("./out"))?;
//!
//! // Old files gain any fields added since they were saved
//! bar.load(&[report.state.path])?;
//! ```

pub mod control_bar;
pub mod error;
pub mod files;
pub mod reconcile;
pub mod schema;
pub mod state;
pub mod subscriptions;
pub mod types;
pub mod zoom;

// Re-exports
pub use control_bar::{ControlBar, ControlBarConfig};
pub use error::{Result, StateError};
pub use files::{
    load, load_str, save, state_file_name, DocumentRenderer, IgnoreReason, LoadOutcome,
    SaveReport, SavedArtifact,
};
pub use reconcile::{apply_snapshot, deep_merge, is_truthy, reconcile_section, ReconcileReport};
pub use schema::{decode_resume, decode_settings, DefaultState, Resume, Settings};
pub use state::{Action, AppState, StateContainer, StateStore};
pub use subscriptions::{
    DropReason, StateEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId, SubscriptionManager,
};
pub use types::*;
pub use zoom::{default_scale, LayoutMetrics, ZoomConfig, ZoomController};
