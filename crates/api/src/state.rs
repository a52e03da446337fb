use std::sync::Arc;

use notes_core::service::NoteService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check).
    pub pool: notes_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Note operations, with existence checks in front of the repository.
    pub notes: Arc<dyn NoteService>,
}
