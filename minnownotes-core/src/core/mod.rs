//! Internal domain modules for the Minnow Notes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod error;
pub mod note;
pub mod storage;
pub mod store;

#[doc(inline)]
pub use error::{MinnowError, Result};
#[doc(inline)]
pub use note::{Note, NoteRecord};
#[doc(inline)]
pub use storage::{load_notes, notes_file_path, save_notes};
#[doc(inline)]
pub use store::NoteStore;
