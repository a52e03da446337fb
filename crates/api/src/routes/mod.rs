pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes                    list (GET), create (POST)
/// /notes/{id}               get (GET), delete (DELETE)
/// /notes/title/{title}      get by exact title (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(notes::router())
}
