//! Core library for Minnow Notes — a minimal single-user note-taking tool.
//!
//! The primary entry point is [`NoteStore`], an in-memory, insertion-ordered
//! collection of notes. All mutations go through `NoteStore` methods; the
//! [`core::storage`] module persists a store to a JSON file and restores it.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    error::{MinnowError, Result},
    note::{Note, NoteRecord},
    storage::{load_notes, notes_file_path, save_notes},
    store::NoteStore,
};
