//! Handlers for the `/Profile` resource: the caller's own account.

use axum::extract::State;
use axum::Json;
use linkvault_db::models::user::{ChangePasswordDto, UserDto};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::profile::ProfileService;
use crate::services::user::UserService;
use crate::state::AppState;

/// GET /Profile
pub async fn get(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserDto>> {
    let dto = UserService::get(&state.pool, user.user_id).await?;
    Ok(Json(dto))
}

/// PUT /Profile
///
/// Update the caller's own name and username. The target is always the
/// caller; any id in the body is ignored.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(dto): Json<UserDto>,
) -> AppResult<Json<UserDto>> {
    let updated = ProfileService::update(&state.pool, user.user_id, &dto).await?;
    Ok(Json(updated))
}

/// PUT /Profile/Password
pub async fn change_password(
    State(state): State<AppState>,
    user: AuthUser,
    Json(dto): Json<ChangePasswordDto>,
) -> AppResult<()> {
    ProfileService::change_password(&state.pool, user.user_id, &dto.new_password).await?;
    tracing::info!(user_id = user.user_id, "Password changed");
    Ok(())
}
