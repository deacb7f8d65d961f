//! Liveness and schema status, mounted at the root (`/health`).

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Database portion of the health payload.
#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// Embedded migrations not yet applied; `None` when the migrations
    /// table could not be read.
    pub pending_migrations: Option<usize>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database answers and the schema is current, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

/// GET /health
///
/// Always 200; a caller inspects `status` to tell a stale schema or an
/// unreachable database from a healthy service.
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let reachable = skillmatch_db::health_check(&state.pool).await.is_ok();
    let pending_migrations = if reachable {
        skillmatch_db::pending_migrations(&state.pool).await.ok()
    } else {
        None
    };

    let status = match pending_migrations {
        Some(0) => "ok",
        _ => "degraded",
    };
    if status != "ok" {
        tracing::warn!(reachable, ?pending_migrations, "Health check degraded");
    }

    Json(HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            reachable,
            pending_migrations,
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
