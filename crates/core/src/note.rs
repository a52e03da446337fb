//! The `Note` entity and its staged builder.
//!
//! A `Note` only ever exists fully populated: every path that produces one
//! goes through [`NoteBuilder::build`], which refuses to yield an entity with
//! a missing field.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// A single note. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: DbId,
    title: String,
    body: String,
    time_stamp: Timestamp,
}

impl Note {
    pub fn builder() -> NoteBuilder {
        NoteBuilder::default()
    }

    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn time_stamp(&self) -> Timestamp {
        self.time_stamp
    }
}

/// Accumulates note fields before validation.
///
/// Setters are independent and may be called in any order. [`build`] consumes
/// the builder, so one builder yields at most one note.
///
/// [`build`]: NoteBuilder::build
#[derive(Debug, Default, Clone)]
pub struct NoteBuilder {
    id: Option<DbId>,
    title: Option<String>,
    body: Option<String>,
    time_stamp: Option<Timestamp>,
}

impl NoteBuilder {
    pub fn id(mut self, id: DbId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn time_stamp(mut self, time_stamp: Timestamp) -> Self {
        self.time_stamp = Some(time_stamp);
        self
    }

    /// Validate and produce the note.
    ///
    /// Fields are checked in the fixed order `id`, `title`, `body`,
    /// `timeStamp`; the first absent one is reported as
    /// [`CoreError::MissingField`]. An empty string or a non-positive id is
    /// treated as absent.
    pub fn build(self) -> Result<Note, CoreError> {
        let id = self
            .id
            .filter(|id| *id > 0)
            .ok_or(CoreError::MissingField("id"))?;
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .ok_or(CoreError::MissingField("title"))?;
        let body = self
            .body
            .filter(|b| !b.is_empty())
            .ok_or(CoreError::MissingField("body"))?;
        let time_stamp = self
            .time_stamp
            .ok_or(CoreError::MissingField("timeStamp"))?;

        Ok(Note {
            id,
            title,
            body,
            time_stamp,
        })
    }
}

// ---------------------------------------------------------------------------
// Input DTO
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: u64 = 200;

/// Maximum length of a note body in characters.
pub const MAX_BODY_LENGTH: u64 = 10_000;

/// DTO for creating a new note. Id and timestamp are assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNote {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "title length out of range"))]
    pub title: String,
    #[validate(length(min = 1, max = MAX_BODY_LENGTH, message = "body length out of range"))]
    pub body: String,
}

impl CreateNote {
    /// Run field validation, mapping failures to [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}
