//! Save and load of editor state as user-visible files.
//!
//! Saving produces two files sharing a base name: the rendered document
//! (`<name>`) and the full state (`<name>.json`). Loading takes the files a
//! user picked, reads the single `.json` among them and reconciles it into
//! the current state.

mod load;
mod save;

pub use load::{load, load_str, IgnoreReason, LoadOutcome, DEFAULT_EXTENSION};
pub use save::{save, state_file_name, DocumentRenderer, SaveReport, SavedArtifact};
