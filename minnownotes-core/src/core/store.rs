//! The in-memory note collection and its operations.

use log::debug;

use crate::{MinnowError, Note, NoteRecord, Result};

/// Fixed line returned by [`NoteStore::list`] when the store is empty.
pub const NO_NOTES: &str = "No notes.";

/// Header line above the listing returned by [`NoteStore::list`].
pub const LIST_HEADER: &str = "All notes:";

/// Fixed message returned by [`NoteStore::find_by_date`] when nothing matches.
pub const NO_NOTES_FOR_DATE: &str = "No notes found for that date.";

/// An insertion-ordered collection of [`Note`]s.
///
/// Ids come from a monotonic counter, independent of list position: deleting
/// a note never renumbers the survivors and never causes a later `create` to
/// re-issue a previously used id. Lookups by id always scan for the matching
/// id field, never index by position.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: usize,
}

impl NoteStore {
    /// Creates an empty store with the id counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends a new note stamped with the current time and the next free id.
    ///
    /// For a store that has never seen a deletion, the assigned id equals the
    /// note's 0-based position.
    pub fn create(&mut self, title: impl Into<String>, body: impl Into<String>) {
        let id = self.next_id;
        // Saturates at usize::MAX rather than panicking on the increment.
        self.next_id = id.saturating_add(1);
        self.notes.push(Note::new(id, title, body));
        debug!("created note id={id}, count={}", self.notes.len());
    }

    /// Formatted listing of all notes in insertion order, one line per note,
    /// or [`NO_NOTES`] when the store is empty.
    pub fn list(&self) -> String {
        if self.notes.is_empty() {
            return NO_NOTES.to_string();
        }
        let mut out = String::from(LIST_HEADER);
        for note in &self.notes {
            out.push('\n');
            out.push_str(&note.to_string());
        }
        out
    }

    /// Whether any note currently carries the given id. O(n).
    pub fn exists(&self, id: usize) -> bool {
        self.notes.iter().any(|note| note.id() == id)
    }

    fn find_mut(&mut self, id: usize) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id() == id)
    }

    /// Replaces the title and body of the note with the given id.
    ///
    /// The note's id and creation time are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MinnowError::NoteNotFound`] when no note has that id; the
    /// store is left untouched.
    pub fn edit(
        &mut self,
        id: usize,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<()> {
        let note = self.find_mut(id).ok_or(MinnowError::NoteNotFound(id))?;
        note.set_title(title);
        note.set_body(body);
        debug!("edited note id={id}");
        Ok(())
    }

    /// Removes the note with the given id, shifting later notes down one
    /// position. Surviving notes keep their id values.
    ///
    /// # Errors
    ///
    /// Returns [`MinnowError::NoteNotFound`] when no note has that id.
    pub fn delete(&mut self, id: usize) -> Result<()> {
        let position = self
            .notes
            .iter()
            .position(|note| note.id() == id)
            .ok_or(MinnowError::NoteNotFound(id))?;
        self.notes.remove(position);
        debug!("deleted note id={id}, count={}", self.notes.len());
        Ok(())
    }

    /// Renders every note created on the given `DD.MM.YYYY` date, one line
    /// per note in insertion order, or [`NO_NOTES_FOR_DATE`] when none match.
    ///
    /// The comparison is against the exact formatted date string, so the
    /// query must be zero-padded (`05.03.2024`, not `5.3.2024`).
    pub fn find_by_date(&self, date: &str) -> String {
        let lines: Vec<String> = self
            .notes
            .iter()
            .filter(|note| note.created_date() == date)
            .map(|note| note.to_string())
            .collect();
        if lines.is_empty() {
            return NO_NOTES_FOR_DATE.to_string();
        }
        lines.join("\n")
    }

    /// Serializes the store to a JSON array of `{id, title, body, time}`
    /// records in current list order.
    pub fn to_json(&self) -> Result<String> {
        let records: Vec<NoteRecord> = self.notes.iter().map(NoteRecord::from).collect();
        Ok(serde_json::to_string(&records)?)
    }

    /// Replaces the entire store contents with the notes parsed from a JSON
    /// array of `{id, title, body, time}` records, in array order.
    ///
    /// The id counter is reseeded past the highest loaded id so later
    /// `create` calls cannot collide with loaded notes.
    ///
    /// # Errors
    ///
    /// Fails on invalid JSON, a missing field, an unparsable `time` string,
    /// or an id too large for the counter to be reseeded past it. Every
    /// record is converted and the counter computed before anything is
    /// replaced, so a failed load leaves the store exactly as it was.
    pub fn from_json(&mut self, json: &str) -> Result<()> {
        let records: Vec<NoteRecord> = serde_json::from_str(json)?;
        let notes: Vec<Note> = records
            .into_iter()
            .map(Note::try_from)
            .collect::<Result<_>>()?;
        let next_id = match notes.iter().map(Note::id).max() {
            Some(max) => max.checked_add(1).ok_or(MinnowError::IdOutOfRange(max))?,
            None => 0,
        };
        self.next_id = next_id;
        debug!("loaded {} notes, next_id={}", notes.len(), self.next_id);
        self.notes = notes;
        Ok(())
    }
}
