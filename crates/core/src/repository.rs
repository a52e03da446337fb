//! Storage seam for notes.
//!
//! Lookups return `Ok(None)` when no row matches; absence is never reported
//! through builder validation. A row that exists but is incomplete still
//! fails with [`CoreError::MissingField`].

use async_trait::async_trait;

use crate::error::CoreError;
use crate::note::{CreateNote, Note};
use crate::types::DbId;

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Find a note by its ID.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Note>, CoreError>;

    /// Find a note whose title equals `title` exactly.
    async fn find_by_title(&self, title: &str) -> Result<Option<Note>, CoreError>;

    /// List every note, newest first. An empty store yields an empty vec.
    async fn find_all(&self) -> Result<Vec<Note>, CoreError>;

    /// Delete a note and return the row as it was removed, or `None` if no
    /// row with that ID was there to delete.
    async fn delete_by_id(&self, id: DbId) -> Result<Option<Note>, CoreError>;

    async fn exist_by_id(&self, id: DbId) -> Result<bool, CoreError>;

    async fn exist_by_title(&self, title: &str) -> Result<bool, CoreError>;

    /// Insert a new note, returning the stored row.
    async fn create(&self, input: &CreateNote) -> Result<Note, CoreError>;
}
