//! Note service: existence checks in front of the repository.
//!
//! Every operation that targets a single note asks the repository whether it
//! exists before acting. A failed check becomes [`CoreError::NotFound`] and
//! the delegated call is skipped entirely.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::note::{CreateNote, Note};
use crate::repository::NoteRepository;
use crate::types::DbId;

#[async_trait]
pub trait NoteService: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Note, CoreError>;

    async fn find_by_title(&self, title: &str) -> Result<Note, CoreError>;

    async fn find_all(&self) -> Result<Vec<Note>, CoreError>;

    async fn delete_by_id(&self, id: DbId) -> Result<Note, CoreError>;

    async fn create(&self, input: CreateNote) -> Result<Note, CoreError>;
}

/// Default [`NoteService`] backed by any [`NoteRepository`].
#[derive(Clone)]
pub struct NoteServiceImpl {
    repository: Arc<dyn NoteRepository>,
}

impl NoteServiceImpl {
    pub fn new(repository: Arc<dyn NoteRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl NoteService for NoteServiceImpl {
    async fn find_by_id(&self, id: DbId) -> Result<Note, CoreError> {
        if !self.repository.exist_by_id(id).await? {
            tracing::debug!(note_id = id, "Note lookup missed");
            return Err(CoreError::note_not_found("id", id));
        }
        // The row can disappear between the check and the read.
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::note_not_found("id", id))
    }

    async fn find_by_title(&self, title: &str) -> Result<Note, CoreError> {
        if !self.repository.exist_by_title(title).await? {
            tracing::debug!(title, "Note lookup by title missed");
            return Err(CoreError::note_not_found("title", title));
        }
        self.repository
            .find_by_title(title)
            .await?
            .ok_or_else(|| CoreError::note_not_found("title", title))
    }

    async fn find_all(&self) -> Result<Vec<Note>, CoreError> {
        self.repository.find_all().await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<Note, CoreError> {
        if !self.repository.exist_by_id(id).await? {
            tracing::debug!(note_id = id, "Delete skipped, note does not exist");
            return Err(CoreError::note_not_found("id", id));
        }

        match self.repository.delete_by_id(id).await? {
            Some(note) => {
                tracing::info!(note_id = id, title = %note.title(), "Note deleted");
                Ok(note)
            }
            None => {
                tracing::warn!(note_id = id, "Note was deleted concurrently");
                Err(CoreError::note_not_found("id", id))
            }
        }
    }

    async fn create(&self, input: CreateNote) -> Result<Note, CoreError> {
        input.check()?;
        let note = self.repository.create(&input).await?;
        tracing::info!(note_id = note.id(), "Note created");
        Ok(note)
    }
}
