//! Writing the document and state files.

use crate::error::{Result, StateError};
use crate::state::{AppState, StateContainer};
use crate::types::{Hash, Timestamp};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Renders the binary document (e.g. a PDF) for a state.
pub trait DocumentRenderer {
    fn render(&self, state: &AppState) -> Result<Vec<u8>>;
}

impl<F> DocumentRenderer for F
where
    F: Fn(&AppState) -> Result<Vec<u8>>,
{
    fn render(&self, state: &AppState) -> Result<Vec<u8>> {
        self(state)
    }
}

/// A file written by [`save`].
#[derive(Clone, Debug, PartialEq)]
pub struct SavedArtifact {
    pub path: PathBuf,
    pub hash: Hash,
    pub size: usize,
}

/// Both files written by one save.
#[derive(Clone, Debug)]
pub struct SaveReport {
    pub document: SavedArtifact,
    pub state: SavedArtifact,
    pub saved_at: Timestamp,
}

/// Name of the state file saved next to a document.
pub fn state_file_name(file_name: &str) -> String {
    format!("{}.json", file_name)
}

/// Render the current state and write the document and state files.
///
/// `file_name` must be a bare file name. Nothing is written if rendering
/// fails.
pub fn save<C, R>(container: &C, renderer: &R, dir: &Path, file_name: &str) -> Result<SaveReport>
where
    C: StateContainer + ?Sized,
    R: DocumentRenderer + ?Sized,
{
    validate_file_name(file_name)?;

    let state = container.get_state();
    let document = renderer.render(&state)?;
    let json = serde_json::to_vec(&state)?;

    fs::create_dir_all(dir)?;
    let document_path = dir.join(file_name);
    let state_path = dir.join(state_file_name(file_name));

    // Stage both before renaming either, so a failed write leaves no half-save
    let document_temp = stage(&document_path, &document)?;
    let state_temp = match stage(&state_path, &json) {
        Ok(temp) => temp,
        Err(e) => {
            discard(&document_temp);
            return Err(e);
        }
    };

    // State first: if it cannot land, the document is not replaced either
    if let Err(e) = fs::rename(&state_temp, &state_path) {
        discard(&state_temp);
        discard(&document_temp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&document_temp, &document_path) {
        discard(&document_temp);
        return Err(e.into());
    }

    let document = SavedArtifact::new(document_path, &document);
    let state = SavedArtifact::new(state_path, &json);

    info!(
        document = %document.path.display(),
        state_hash = %state.hash,
        state_bytes = state.size,
        "saved resume"
    );

    Ok(SaveReport {
        document,
        state,
        saved_at: Timestamp::now(),
    })
}

fn validate_file_name(file_name: &str) -> Result<()> {
    let path = Path::new(file_name);
    let bare = path.file_name().map(|n| n == path.as_os_str()).unwrap_or(false);
    if file_name.is_empty() || !bare {
        return Err(StateError::InvalidFileName(path.to_path_buf()));
    }
    Ok(())
}

/// Write `content` next to `path` under a `.tmp` name, returning the temp path.
///
/// The temp file is removed if the write fails.
fn stage(path: &Path, content: &[u8]) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StateError::InvalidFileName(path.to_path_buf()))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(content)?;
        file.sync_all()
    });
    if let Err(e) = written {
        discard(&temp_path);
        return Err(e.into());
    }

    Ok(temp_path)
}

fn discard(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        if e.kind() != ErrorKind::NotFound {
            warn!(path = %temp_path.display(), error = %e, "failed to remove temp file");
        }
    }
}

impl SavedArtifact {
    fn new(path: PathBuf, content: &[u8]) -> Self {
        Self {
            path,
            hash: Hash::from_bytes(content),
            size: content.len(),
        }
    }
}
