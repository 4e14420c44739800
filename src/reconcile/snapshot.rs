//! Applying a parsed snapshot to a state container.

use super::merge::{deep_merge, is_truthy};
use crate::error::Result;
use crate::schema::DefaultState;
use crate::state::{Action, StateContainer};
use crate::types::{Revision, Section};
use serde_json::Value;
use tracing::debug;

/// Outcome of applying a snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReconcileReport {
    /// Sections that were merged and dispatched, with the resulting revision.
    pub replaced: Vec<(Section, Revision)>,
}

impl ReconcileReport {
    /// Whether any section was replaced.
    pub fn is_empty(&self) -> bool {
        self.replaced.is_empty()
    }

    /// Whether the given section was replaced.
    pub fn replaced(&self, section: Section) -> bool {
        self.replaced.iter().any(|(s, _)| *s == section)
    }
}

/// Merge one snapshot section over its current default.
pub fn reconcile_section(defaults: &DefaultState, section: Section, snapshot: &Value) -> Value {
    deep_merge(defaults.section(section), snapshot)
}

/// Reconcile a parsed snapshot and dispatch each present section.
///
/// A falsy snapshot is a no-op. Each of `resume` and `settings` is merged
/// over its default and dispatched only when present and truthy; other
/// top-level keys are ignored.
pub fn apply_snapshot<C>(
    container: &C,
    defaults: &DefaultState,
    snapshot: &Value,
) -> Result<ReconcileReport>
where
    C: StateContainer + ?Sized,
{
    let mut report = ReconcileReport::default();

    if !is_truthy(snapshot) {
        debug!("empty snapshot, nothing to apply");
        return Ok(report);
    }

    for section in Section::ALL {
        let Some(value) = snapshot.get(section.key()).filter(|v| is_truthy(v)) else {
            continue;
        };

        let merged = reconcile_section(defaults, section, value);
        let action = match section {
            Section::Resume => Action::SetResume(merged),
            Section::Settings => Action::SetSettings(merged),
        };
        let revision = container.dispatch(action)?;
        report.replaced.push((section, revision));
    }

    debug!(sections = report.replaced.len(), "snapshot applied");
    Ok(report)
}
