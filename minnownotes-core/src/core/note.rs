//! The [`Note`] record and its persisted JSON form.
//!
//! In memory a note carries a [`NaiveDateTime`]; on disk the timestamp is a
//! string in `DD.MM.YYYY HH:MM` form. The two shapes are bridged by
//! [`NoteRecord`] with explicit conversions in both directions rather than
//! custom serde hooks, so a malformed record is rejected before it can reach
//! a store.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::MinnowError;

/// Timestamp format used in the persisted JSON file (minute precision).
pub const TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Date-only format used for date search (`find_by_date`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A single note: identifier, title, body, and creation time.
///
/// The id and creation time are fixed at construction; only the title and
/// body can be changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: usize,
    title: String,
    body: String,
    created_at: NaiveDateTime,
}

impl Note {
    /// Creates a note stamped with the current local time.
    ///
    /// The timestamp is captured fresh on every call, never shared between
    /// constructions.
    pub fn new(id: usize, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_time(id, title, body, Local::now().naive_local())
    }

    /// Creates a note with an explicit creation time (used when restoring
    /// from a persisted record and in tests).
    pub fn with_time(
        id: usize,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            created_at,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// The note's creation date formatted for date search, e.g. `15.03.2024`.
    pub fn created_date(&self) -> String {
        self.created_at.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Note {
    /// Renders the one-line listing form:
    /// `ID:<id>, Date:<d>.<m>.<y> <h>:<min>, Title:<title>`.
    ///
    /// Date and time components are unpadded, matching the historical
    /// display format rather than the padded persisted format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.created_at;
        write!(
            f,
            "ID:{}, Date:{}.{}.{} {}:{}, Title:{}",
            self.id,
            t.day(),
            t.month(),
            t.year(),
            t.hour(),
            t.minute(),
            self.title
        )
    }
}

/// The persisted JSON shape of a note: `{id, title, body, time}`.
///
/// All four fields are required; deserialization fails if any is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: usize,
    pub title: String,
    pub body: String,
    /// Creation time as `DD.MM.YYYY HH:MM`.
    pub time: String,
}

impl From<&Note> for NoteRecord {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            body: note.body.clone(),
            time: note.created_at.format(TIME_FORMAT).to_string(),
        }
    }
}

impl TryFrom<NoteRecord> for Note {
    type Error = MinnowError;

    /// Fails with [`MinnowError::InvalidTimestamp`] when the `time` string
    /// does not parse as `DD.MM.YYYY HH:MM`.
    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        let created_at = NaiveDateTime::parse_from_str(&record.time, TIME_FORMAT)?;
        Ok(Note::with_time(
            record.id,
            record.title,
            record.body,
            created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_new_captures_fields() {
        let note = Note::new(0, "Groceries", "milk, eggs");
        assert_eq!(note.id(), 0);
        assert_eq!(note.title(), "Groceries");
        assert_eq!(note.body(), "milk, eggs");
    }

    #[test]
    fn test_setters_leave_id_and_time_alone() {
        let mut note = Note::with_time(3, "a", "b", sample_time());
        note.set_title("new title");
        note.set_body("new body");
        assert_eq!(note.id(), 3);
        assert_eq!(note.created_at(), sample_time());
        assert_eq!(note.title(), "new title");
        assert_eq!(note.body(), "new body");
    }

    #[test]
    fn test_display_is_unpadded() {
        let note = Note::with_time(2, "Plans", "", sample_time());
        assert_eq!(note.to_string(), "ID:2, Date:15.3.2024 9:5, Title:Plans");
    }

    #[test]
    fn test_record_round_trip_at_minute_precision() {
        let note = Note::with_time(1, "t", "b", sample_time());
        let record = NoteRecord::from(&note);
        assert_eq!(record.time, "15.03.2024 09:05");

        let restored = Note::try_from(record).unwrap();
        assert_eq!(restored, note);
    }

    #[test]
    fn test_record_rejects_bad_timestamp() {
        let record = NoteRecord {
            id: 0,
            title: "t".to_string(),
            body: "b".to_string(),
            time: "2024-03-15 09:05".to_string(),
        };
        assert!(matches!(
            Note::try_from(record),
            Err(MinnowError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_record_requires_all_fields() {
        let missing_body = r#"{"id": 0, "title": "t", "time": "15.03.2024 09:05"}"#;
        assert!(serde_json::from_str::<NoteRecord>(missing_body).is_err());
    }

    #[test]
    fn test_created_date_matches_search_format() {
        let note = Note::with_time(0, "t", "b", sample_time());
        assert_eq!(note.created_date(), "15.03.2024");
    }
}
