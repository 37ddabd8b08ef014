//! Handlers for the `/Link` resource. All routes are owner-scoped: a link
//! belonging to another user behaves as if it did not exist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkvault_core::error::CoreError;
use linkvault_core::types::DbId;
use linkvault_db::models::link::{LinkDto, LinkFilterDto};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::link::LinkService;
use crate::state::AppState;

/// GET /Link
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<LinkDto>>> {
    let links = LinkService::list(&state.pool, user.user_id).await?;
    Ok(Json(links))
}

/// GET /Link/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<LinkDto>> {
    let link = LinkService::get(&state.pool, id, user.user_id).await?;
    Ok(Json(link))
}

/// POST /Link
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(dto): Json<LinkDto>,
) -> AppResult<Response> {
    let dto = LinkDto { id: 0, ..dto };
    let created = LinkService::save(&state.pool, user.user_id, &dto).await?;
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// PUT /Link/{id}
///
/// A missing or foreign link is a 404 before the save rules run.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(dto): Json<LinkDto>,
) -> AppResult<Json<LinkDto>> {
    LinkService::get(&state.pool, id, user.user_id).await?;

    let dto = LinkDto { id, ..dto };
    let updated = LinkService::save(&state.pool, user.user_id, &dto).await?;
    Ok(Json(updated))
}

/// DELETE /Link/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let deleted = LinkService::delete(&state.pool, id, user.user_id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Link", id }.into());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// GET /Link/exists/{id}
pub async fn exists(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<bool>> {
    let exists = LinkService::exists(&state.pool, id, user.user_id).await?;
    Ok(Json(exists))
}

/// PATCH /Link/{id}/favorite
///
/// The body is a raw JSON boolean.
pub async fn update_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(favorite): Json<bool>,
) -> AppResult<Response> {
    let updated = LinkService::update_favorite(&state.pool, id, user.user_id, favorite).await?;
    if !updated {
        return Err(CoreError::NotFound { entity: "Link", id }.into());
    }
    Ok(StatusCode::OK.into_response())
}

/// POST /Link/search
pub async fn search(
    State(state): State<AppState>,
    user: AuthUser,
    Json(filter): Json<LinkFilterDto>,
) -> AppResult<Json<Vec<LinkDto>>> {
    let links = LinkService::search(&state.pool, user.user_id, &filter).await?;
    Ok(Json(links))
}
