use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route("/notes/{id}", get(notes::get_note).delete(notes::delete_note))
        .route("/notes/title/{title}", get(notes::get_note_by_title))
}
