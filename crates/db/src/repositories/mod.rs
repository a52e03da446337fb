//! Repository layer.
//!
//! Repositories own a pool handle and implement the storage traits from
//! `notes_core`. Each store round-trip is bounded by a timeout.

pub mod note_repo;

pub use note_repo::PgNoteRepository;
