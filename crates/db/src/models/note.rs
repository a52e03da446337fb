//! Note row model and count normalization.

use notes_core::error::CoreError;
use notes_core::note::Note;
use notes_core::types::{DbId, Timestamp};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A row from the `notes` table, before validation.
#[derive(Debug, Clone, Default, FromRow)]
pub struct NoteRow {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub time_stamp: Option<Timestamp>,
}

impl NoteRow {
    /// Assemble a [`Note`], failing on the first missing column.
    pub fn into_note(self) -> Result<Note, CoreError> {
        let mut builder = Note::builder();
        if let Some(id) = self.id {
            builder = builder.id(id);
        }
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if let Some(body) = self.body {
            builder = builder.body(body);
        }
        if let Some(time_stamp) = self.time_stamp {
            builder = builder.time_stamp(time_stamp);
        }
        builder.build()
    }
}

/// A `count(...)` column as the driver handed it back.
///
/// Postgres returns `BIGINT` for `count`, but casts, views and some poolers
/// surface it as text. Both shapes collapse to one `i64` via [`normalize`].
///
/// [`normalize`]: RawCount::normalize
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCount {
    Integer(i64),
    Text(String),
}

impl RawCount {
    /// Read `column` from `row`, accepting either an integer or text value.
    pub fn from_row(row: &PgRow, column: &str) -> Result<Self, sqlx::Error> {
        match row.try_get::<i64, _>(column) {
            Ok(n) => Ok(Self::Integer(n)),
            Err(sqlx::Error::ColumnDecode { .. }) => {
                row.try_get::<String, _>(column).map(Self::Text)
            }
            Err(e) => Err(e),
        }
    }

    pub fn normalize(self) -> Result<i64, CoreError> {
        match self {
            Self::Integer(n) => Ok(n),
            Self::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                CoreError::Internal(format!("count column held non-numeric value '{s}'"))
            }),
        }
    }
}
