//! Handlers for the `/User` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkvault_core::error::CoreError;
use linkvault_core::types::{DbId, ADMIN_USER_ID};
use linkvault_db::models::user::UserDto;
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::user::UserService;
use crate::state::AppState;

/// GET /User
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<UserDto>>> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /User/me
///
/// The caller's own account, resolved from the token.
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Response> {
    match UserService::get(&state.pool, user.user_id).await {
        Ok(dto) => Ok(Json(dto).into_response()),
        Err(crate::error::AppError::Core(CoreError::NotFound { .. })) => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Current user not found" })),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

/// GET /User/{id}
///
/// Users may only view their own account.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserDto>> {
    if id != user.user_id {
        return Err(CoreError::domain("You can only view your own account").into());
    }
    let dto = UserService::get(&state.pool, id).await?;
    Ok(Json(dto))
}

/// GET /User/check-username/{username}
pub async fn check_username(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(username): Path<String>,
) -> AppResult<Json<bool>> {
    let exists = UserService::username_exists(&state.pool, &username).await?;
    Ok(Json(exists))
}

/// POST /User
///
/// Create a user (admin only). New users get the default password.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(dto): Json<UserDto>,
) -> AppResult<Json<UserDto>> {
    let dto = UserDto { id: 0, ..dto };
    let created = UserService::save(&state.pool, user.user_id, &dto).await?;
    tracing::info!(user_id = created.id, "User created");
    Ok(Json(created))
}

/// PUT /User/{id}
///
/// Update a user (admin only). A missing target is a 404 before the
/// service's own rules run.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(dto): Json<UserDto>,
) -> AppResult<Json<UserDto>> {
    if user.user_id != ADMIN_USER_ID {
        return Err(CoreError::domain("Only the Admin can update users.").into());
    }

    // Read-path miss semantics: 404 without a trailing period.
    UserService::get(&state.pool, id).await?;

    let dto = UserDto { id, ..dto };
    let updated = UserService::save(&state.pool, user.user_id, &dto).await?;
    Ok(Json(updated))
}

/// DELETE /User/{id}
///
/// Admin only; the admin account itself can never be deleted.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let deleted = UserService::delete(&state.pool, user.user_id, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "User", id }.into());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
