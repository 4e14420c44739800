//! Reconciliation of saved snapshots with the current schema.
//!
//! A snapshot saved by an older editor may be missing fields the current
//! schema has. Loading merges each section of the snapshot over the current
//! defaults, so missing fields take their default value and everything the
//! snapshot does carry wins.

mod merge;
mod snapshot;

pub use merge::{deep_merge, is_truthy};
pub use snapshot::{apply_snapshot, reconcile_section, ReconcileReport};
