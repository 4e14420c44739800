//! Reading a saved state file back into the editor.

use crate::error::{Result, StateError};
use crate::reconcile::{apply_snapshot, ReconcileReport};
use crate::schema::DefaultState;
use crate::state::StateContainer;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension of saved state files.
pub const DEFAULT_EXTENSION: &str = "json";

/// Why a load request did nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Anything but exactly one file was selected.
    SelectionCount(usize),
    /// The selected file does not carry the state file extension.
    UnsupportedExtension(PathBuf),
}

/// Result of a load request.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Applied(ReconcileReport),
    Ignored(IgnoreReason),
}

/// Load the single selected state file.
///
/// Selections of zero or several files, or of a file without the
/// `extension`, are ignored without touching the container. Read and parse
/// failures are returned to the caller.
pub fn load<C, P>(
    container: &C,
    defaults: &DefaultState,
    files: &[P],
    extension: &str,
) -> Result<LoadOutcome>
where
    C: StateContainer + ?Sized,
    P: AsRef<Path>,
{
    let path = match files {
        [only] => only.as_ref(),
        _ => {
            debug!(selected = files.len(), "ignoring load: expected exactly one file");
            return Ok(LoadOutcome::Ignored(IgnoreReason::SelectionCount(files.len())));
        }
    };

    if !has_extension(path, extension) {
        debug!(path = %path.display(), "ignoring load: unsupported extension");
        return Ok(LoadOutcome::Ignored(IgnoreReason::UnsupportedExtension(
            path.to_path_buf(),
        )));
    }

    let text = fs::read_to_string(path)?;
    let report = load_str(container, defaults, &text)?;

    info!(path = %path.display(), sections = report.replaced.len(), "loaded resume");
    Ok(LoadOutcome::Applied(report))
}

/// Parse state file text and reconcile it into the container.
pub fn load_str<C>(container: &C, defaults: &DefaultState, text: &str) -> Result<ReconcileReport>
where
    C: StateContainer + ?Sized,
{
    let snapshot: Value =
        serde_json::from_str(text).map_err(|e| StateError::Parse(e.to_string()))?;
    apply_snapshot(container, defaults, &snapshot)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}
