//! Repository for the `notes` table.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use notes_core::error::CoreError;
use notes_core::note::{CreateNote, Note};
use notes_core::repository::NoteRepository;
use notes_core::types::DbId;
use sqlx::postgres::PgRow;

use crate::models::note::{NoteRow, RawCount};
use crate::DbPool;

/// Column list for notes queries.
const COLUMNS: &str = "id, title, body, time_stamp";

/// Default bound on a single store round-trip.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Postgres-backed [`NoteRepository`].
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: DbPool,
    timeout: Duration,
}

impl PgNoteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self::with_timeout(pool, DEFAULT_STORE_TIMEOUT)
    }

    pub fn with_timeout(pool: DbPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Await a store call, failing with [`CoreError::Store`] if it errors or
    /// outlives the configured timeout.
    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(CoreError::store),
            Err(elapsed) => {
                tracing::error!(
                    op,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Store round-trip timed out"
                );
                Err(CoreError::store(elapsed))
            }
        }
    }
}

/// Interpret a `SELECT count(id) AS count` row as an existence flag.
fn exists_from(row: &PgRow) -> Result<bool, CoreError> {
    let count = RawCount::from_row(row, "count")
        .map_err(CoreError::store)?
        .normalize()?;
    Ok(count > 0)
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Note>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        let row = self
            .bounded(
                "find_by_id",
                sqlx::query_as::<_, NoteRow>(&query)
                    .bind(id)
                    .fetch_optional(&self.pool),
            )
            .await?;
        row.map(NoteRow::into_note).transpose()
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Note>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE title = $1
             ORDER BY time_stamp DESC
             LIMIT 1"
        );
        let row = self
            .bounded(
                "find_by_title",
                sqlx::query_as::<_, NoteRow>(&query)
                    .bind(title)
                    .fetch_optional(&self.pool),
            )
            .await?;
        row.map(NoteRow::into_note).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Note>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY time_stamp DESC, id DESC");
        let rows = self
            .bounded(
                "find_all",
                sqlx::query_as::<_, NoteRow>(&query).fetch_all(&self.pool),
            )
            .await?;
        rows.into_iter().map(NoteRow::into_note).collect()
    }

    /// Delete and return the row in one statement, so the snapshot handed back
    /// is exactly what was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<Option<Note>, CoreError> {
        let query = format!("DELETE FROM notes WHERE id = $1 RETURNING {COLUMNS}");
        let row = self
            .bounded(
                "delete_by_id",
                sqlx::query_as::<_, NoteRow>(&query)
                    .bind(id)
                    .fetch_optional(&self.pool),
            )
            .await?;
        row.map(NoteRow::into_note).transpose()
    }

    async fn exist_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        let row = self
            .bounded(
                "exist_by_id",
                sqlx::query("SELECT count(id) AS count FROM notes WHERE id = $1")
                    .bind(id)
                    .fetch_one(&self.pool),
            )
            .await?;
        exists_from(&row)
    }

    async fn exist_by_title(&self, title: &str) -> Result<bool, CoreError> {
        let row = self
            .bounded(
                "exist_by_title",
                sqlx::query("SELECT count(id) AS count FROM notes WHERE title = $1")
                    .bind(title)
                    .fetch_one(&self.pool),
            )
            .await?;
        exists_from(&row)
    }

    async fn create(&self, input: &CreateNote) -> Result<Note, CoreError> {
        let query = format!(
            "INSERT INTO notes (title, body, time_stamp)
             VALUES ($1, $2, NOW())
             RETURNING {COLUMNS}"
        );
        let row = self
            .bounded(
                "create",
                sqlx::query_as::<_, NoteRow>(&query)
                    .bind(&input.title)
                    .bind(&input.body)
                    .fetch_one(&self.pool),
            )
            .await?;
        row.into_note()
    }
}
