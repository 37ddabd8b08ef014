//! Health and readiness probes under `/Health`. All public.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;

use crate::state::AppState;

/// GET /Health -- returns 200 whenever the service is running.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "timestamp": Utc::now() }))
}

/// GET /Health/detailed -- includes database connectivity; 503 when the
/// database is unreachable.
async fn health_detailed(State(state): State<AppState>) -> Response {
    match linkvault_db::health_check(&state.pool).await {
        Ok(()) => Json(json!({
            "status": "healthy",
            "database": "connected",
            "timestamp": Utc::now(),
        }))
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database connection failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": "disconnected",
                    "timestamp": Utc::now(),
                })),
            )
                .into_response()
        }
    }
}

/// GET /Health/live -- liveness probe for container orchestration.
async fn health_live() -> StatusCode {
    StatusCode::OK
}

/// GET /Health/ready -- readiness probe; 503 until the database answers.
async fn health_ready(State(state): State<AppState>) -> StatusCode {
    match linkvault_db::health_check(&state.pool).await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Mount health check routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Health", get(health))
        .route("/Health/detailed", get(health_detailed))
        .route("/Health/live", get(health_live))
        .route("/Health/ready", get(health_ready))
}
