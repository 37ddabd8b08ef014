//! Handlers for the `/Project` resource. All routes are owner-scoped.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkvault_core::error::CoreError;
use linkvault_core::types::DbId;
use linkvault_db::models::project::ProjectDto;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::project::ProjectService;
use crate::state::AppState;

/// GET /Project
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ProjectDto>>> {
    let projects = ProjectService::list(&state.pool, user.user_id).await?;
    Ok(Json(projects))
}

/// GET /Project/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDto>> {
    let project = ProjectService::get(&state.pool, id, user.user_id).await?;
    Ok(Json(project))
}

/// POST /Project
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(dto): Json<ProjectDto>,
) -> AppResult<Response> {
    let dto = ProjectDto { id: 0, ..dto };
    let created = ProjectService::save(&state.pool, user.user_id, &dto).await?;
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// PUT /Project/{id}
///
/// A missing or foreign project is a 404 before the save rules run.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(dto): Json<ProjectDto>,
) -> AppResult<Json<ProjectDto>> {
    ProjectService::get(&state.pool, id, user.user_id).await?;

    let dto = ProjectDto { id, ..dto };
    let updated = ProjectService::save(&state.pool, user.user_id, &dto).await?;
    Ok(Json(updated))
}

/// GET /Project/exists/{id}
pub async fn exists(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<bool>> {
    let exists = ProjectService::exists(&state.pool, id, user.user_id).await?;
    Ok(Json(exists))
}

/// DELETE /Project/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let deleted = ProjectService::delete(&state.pool, id, user.user_id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Project",
            id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
