//! Handlers for the `/Label` resource. Labels are global across users.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkvault_core::error::CoreError;
use linkvault_core::types::DbId;
use linkvault_db::models::label::LabelDto;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::label::LabelService;
use crate::state::AppState;

/// GET /Label
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<LabelDto>>> {
    let labels = LabelService::list(&state.pool).await?;
    Ok(Json(labels))
}

/// GET /Label/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<LabelDto>> {
    let label = LabelService::get(&state.pool, id).await?;
    Ok(Json(label))
}

/// POST /Label
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(dto): Json<LabelDto>,
) -> AppResult<Json<LabelDto>> {
    let dto = LabelDto { id: 0, ..dto };
    let created = LabelService::save(&state.pool, &dto).await?;
    Ok(Json(created))
}

/// PUT /Label/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(dto): Json<LabelDto>,
) -> AppResult<Json<LabelDto>> {
    let dto = LabelDto { id, ..dto };
    let updated = LabelService::save(&state.pool, &dto).await?;
    Ok(Json(updated))
}

/// DELETE /Label/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let deleted = LabelService::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Label", id }.into());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
