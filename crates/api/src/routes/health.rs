use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness report for the notes service.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub service: &'static str,
    pub version: &'static str,
    /// `"up"` when the note store answered, `"degraded"` otherwise.
    pub status: &'static str,
    pub store_reachable: bool,
    /// Per-call store bound the repository was configured with.
    pub store_timeout_secs: u64,
}

async fn service_status(State(state): State<AppState>) -> Json<ServiceStatus> {
    let store_reachable = notes_db::health_check(&state.pool).await.is_ok();
    if !store_reachable {
        tracing::warn!("Note store did not answer the status check");
    }

    Json(ServiceStatus {
        service: "notes",
        version: env!("CARGO_PKG_VERSION"),
        status: if store_reachable { "up" } else { "degraded" },
        store_reachable,
        store_timeout_secs: state.config.store_timeout_secs,
    })
}

/// `GET /health`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(service_status))
}
