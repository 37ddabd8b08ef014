use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linkvault_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the wire shape clients rely on:
/// 400/401/404 carry `{"message": "<text>"}`, 500 carries a bare JSON
/// string with a generic message (the detail is logged, never surfaced).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `linkvault_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Domain(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    return internal_response();
                }
            },

            AppError::Database(err) => return database_response(err),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                return internal_response();
            }
        };

        (status, axum::Json(json!({ "message": message }))).into_response()
    }
}

/// Generic 500 response. The body is a bare JSON string, matching the
/// plain-text 500s the rest of the API contract expects.
fn internal_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json("An unexpected error occurred".to_string()),
    )
        .into_response()
}

/// Classify a sqlx error into a response.
///
/// Unique constraint violations (constraint name starting with `uq_`) are a
/// backstop behind the services' own uniqueness pre-checks and map to 400;
/// everything else maps to 500 with a sanitized message.
fn database_response(err: &sqlx::Error) -> Response {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return (
                    StatusCode::BAD_REQUEST,
                    axum::Json(json!({
                        "message": format!("Duplicate value violates unique constraint: {constraint}")
                    })),
                )
                    .into_response();
            }
        }
    }
    tracing::error!(error = %err, "Database error");
    internal_response()
}
