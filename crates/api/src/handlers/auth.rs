//! Handler for the `/Auth` resource (login).

use axum::extract::State;
use axum::Json;
use linkvault_core::types::{Timestamp, ADMIN_USER_ID};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::issue_token;
use crate::error::{AppError, AppResult};
use crate::services::login::LoginService;
use crate::state::AppState;

/// Request body for `POST /Auth`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub name: String,
    pub is_admin: bool,
    pub token: String,
    pub expires: Timestamp,
}

/// POST /Auth
///
/// Authenticate with username + password. Returns a bearer token and its
/// expiry. Credential failures come back as 401 with the service's message.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = LoginService::authenticate(&state.pool, &input.username, &input.password).await?;

    let (token, expires) = issue_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token issuance error: {e}")))?;

    tracing::info!(username = %user.username, "User authenticated");

    Ok(Json(LoginResponse {
        name: user.name,
        is_admin: user.id == ADMIN_USER_ID,
        token,
        expires,
    }))
}
