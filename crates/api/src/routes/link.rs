//! Route definitions for `/Link`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::link;
use crate::state::AppState;

/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// POST   /search          -> search
/// GET    /exists/{id}     -> exists
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// PATCH  /{id}/favorite   -> update_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(link::list).post(link::create))
        .route("/search", post(link::search))
        .route("/exists/{id}", get(link::exists))
        .route(
            "/{id}",
            get(link::get_by_id).put(link::update).delete(link::delete),
        )
        .route("/{id}/favorite", patch(link::update_favorite))
}
