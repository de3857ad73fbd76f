//! JSON file persistence for a [`NoteStore`].
//!
//! Saving writes the whole collection in one shot; loading reads and parses
//! the whole file before touching the store, so a failed load preserves the
//! in-memory state.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{NoteStore, Result};

/// Builds the notes file path from a user-supplied name without extension:
/// `"vacation"` becomes `vacation.json`.
pub fn notes_file_path(stem: &str) -> PathBuf {
    PathBuf::from(format!("{stem}.json"))
}

/// Writes the store as a JSON array to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`crate::MinnowError::Io`] when the file cannot be written.
pub fn save_notes<P: AsRef<Path>>(store: &NoteStore, path: P) -> Result<()> {
    let json = store.to_json()?;
    fs::write(&path, json)?;
    info!(
        "saved {} notes to {}",
        store.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Reads a JSON notes file and replaces the store contents with it.
///
/// # Errors
///
/// Returns [`crate::MinnowError::Io`] when the file is missing or unreadable,
/// [`crate::MinnowError::Json`] on invalid JSON or a missing field, and
/// [`crate::MinnowError::InvalidTimestamp`] on a bad `time` string. On any
/// error the store keeps its previous contents.
pub fn load_notes<P: AsRef<Path>>(store: &mut NoteStore, path: P) -> Result<()> {
    let json = fs::read_to_string(&path)?;
    store.from_json(&json)?;
    info!(
        "loaded {} notes from {}",
        store.len(),
        path.as_ref().display()
    );
    Ok(())
}
