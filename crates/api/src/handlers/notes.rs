//! Handlers for `/notes`.
//!
//! Handlers only translate between HTTP and [`NoteService`]; every rule about
//! existence lives in the service.
//!
//! [`NoteService`]: notes_core::service::NoteService

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notes_core::note::CreateNote;
use notes_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Turn a path extraction failure into a JSON 400.
fn note_id(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// GET /notes
///
/// List every note, newest first.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = state.notes.find_all().await?;
    Ok(Json(notes))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = note_id(path)?;
    let note = state.notes.find_by_id(id).await?;
    Ok(Json(note))
}

/// GET /notes/title/{title}
pub async fn get_note_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<impl IntoResponse> {
    let note = state.notes.find_by_title(&title).await?;
    Ok(Json(note))
}

/// POST /notes
///
/// Create a note; the store assigns its id and timestamp.
pub async fn create_note(
    State(state): State<AppState>,
    input: Result<Json<CreateNote>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = input.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let note = state.notes.create(input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// DELETE /notes/{id}
///
/// Delete a note and return it as it was just before removal.
pub async fn delete_note(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = note_id(path)?;
    let note = state.notes.delete_by_id(id).await?;
    Ok(Json(note))
}
