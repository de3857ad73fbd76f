//! Error types for the Minnow Notes core library.

use thiserror::Error;

/// All errors that can occur within the Minnow Notes core library.
#[derive(Debug, Error)]
pub enum MinnowError {
    /// A note ID was requested that does not exist in the store.
    #[error("Note not found: {0}")]
    NoteNotFound(usize),

    /// A persisted note id is too large to take a successor, so the id
    /// counter could not be reseeded past it.
    #[error("Note id out of range: {0}")]
    IdOutOfRange(usize),

    /// A persisted timestamp string did not match the `DD.MM.YYYY HH:MM` format.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted note data could not be deserialized from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`MinnowError`].
pub type Result<T> = std::result::Result<T, MinnowError>;

impl MinnowError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoteNotFound(id) => format!("No note with id {id}"),
            Self::IdOutOfRange(id) => format!("Notes file contains an out-of-range id: {id}"),
            Self::InvalidTimestamp(e) => format!("Bad timestamp in notes file: {e}"),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
