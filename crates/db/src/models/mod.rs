//! Raw row types read from the `notes` table.
//!
//! Rows are decoded leniently (every column optional) and only become domain
//! entities through `notes_core::note::NoteBuilder`.

pub mod note;
