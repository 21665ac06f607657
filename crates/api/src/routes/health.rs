//! `GET /health`: process liveness plus database and schema readiness.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    /// `ok` when the database answers and the schema is current, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Embedded migrations not yet applied; `None` when it could not be read.
    pub pending_migrations: Option<usize>,
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = notyetdude_db::health_check(&state.pool).await.is_ok();

    let pending_migrations = if db_healthy {
        match notyetdude_db::pending_migrations(&state.pool).await {
            Ok(pending) => Some(pending),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read migration state");
                None
            }
        }
    } else {
        None
    };

    let ready = db_healthy && pending_migrations == Some(0);
    Json(HealthReport {
        status: if ready { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pending_migrations,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
