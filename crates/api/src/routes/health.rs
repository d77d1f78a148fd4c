use axum::extract::State;
use axum::{routing::get, Json, Router};
use recordshop_db::repositories::RecordRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database cannot be reached.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    /// Records in the catalog; absent when the count query fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_records: Option<i64>,
}

/// GET /health
///
/// Service version, database reachability and catalog size. Always 200 so
/// load balancers can read the body.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = recordshop_db::health_check(&state.pool).await.is_ok();

    let catalog_records = if db_healthy {
        RecordRepo::count(&state.pool)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Catalog count failed during health check"))
            .ok()
    } else {
        None
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        catalog_records,
    })
}

/// Mount at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
