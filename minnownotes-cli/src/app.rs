//! Menu choices and per-choice request handling.
//!
//! [`App`] owns the note store and turns already-read user input into
//! display strings. It performs no console I/O itself; prompting and
//! printing live in `main.rs`, which keeps every handler testable without a
//! terminal.

use log::warn;
use minnownotes_core::{load_notes, notes_file_path, save_notes, NoteStore};

/// The interactive menu, printed before every read of a choice.
pub const MENU: &str = "\nMenu:\n\
    1. Create a note.\n\
    2. List all notes.\n\
    3. Edit a note.\n\
    4. Delete a note.\n\
    5. Find notes by date.\n\
    S. Save notes to a file.\n\
    L. Load notes from a file.\n\
    0. Exit.";

/// Message shown for any input that is not a menu choice.
pub const INVALID_INPUT: &str = "Invalid input, try again.";

/// Message shown when an id prompt receives something other than a
/// non-negative integer.
pub const INVALID_ID: &str = "Invalid id: expected a non-negative number.";

/// One menu entry, parsed from a line of user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    Create,
    List,
    Edit,
    Delete,
    FindByDate,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    /// Maps a raw input line to a menu entry; `None` means invalid input.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Create),
            "2" => Some(Self::List),
            "3" => Some(Self::Edit),
            "4" => Some(Self::Delete),
            "5" => Some(Self::FindByDate),
            "S" => Some(Self::Save),
            "L" => Some(Self::Load),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Parses a note id from a prompt answer.
pub fn parse_id(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

/// Application state for one interactive session.
#[derive(Default)]
pub struct App {
    store: NoteStore,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a note with this id exists; checked before the edit and
    /// delete flows prompt for anything further.
    pub fn has_note(&self, id: usize) -> bool {
        self.store.exists(id)
    }

    pub fn create(&mut self, title: &str, body: &str) -> String {
        self.store.create(title, body);
        "Note created.".to_string()
    }

    pub fn list(&self) -> String {
        self.store.list()
    }

    pub fn edit(&mut self, id: usize, title: &str, body: &str) -> String {
        match self.store.edit(id, title, body) {
            Ok(()) => "Note updated.".to_string(),
            Err(e) => e.user_message(),
        }
    }

    pub fn delete(&mut self, id: usize) -> String {
        match self.store.delete(id) {
            Ok(()) => "Note deleted.".to_string(),
            Err(e) => e.user_message(),
        }
    }

    pub fn find_by_date(&self, date: &str) -> String {
        self.store.find_by_date(date.trim())
    }

    /// Saves to `<stem>.json`. Errors come back as user-facing text; the
    /// menu loop always continues.
    pub fn save(&self, stem: &str) -> String {
        let path = notes_file_path(stem.trim());
        match save_notes(&self.store, &path) {
            Ok(()) => format!("Saved {} notes to {}.", self.store.len(), path.display()),
            Err(e) => {
                warn!("save to {} failed: {e}", path.display());
                e.user_message()
            }
        }
    }

    /// Loads from `<stem>.json`, replacing the store. A failed load reports
    /// the error and keeps the previous notes.
    pub fn load(&mut self, stem: &str) -> String {
        let path = notes_file_path(stem.trim());
        match load_notes(&mut self.store, &path) {
            Ok(()) => format!("Loaded {} notes from {}.", self.store.len(), path.display()),
            Err(e) => {
                warn!("load from {} failed: {e}", path.display());
                e.user_message()
            }
        }
    }
}
