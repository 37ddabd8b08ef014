//! Route definitions for `/Project`.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /exists/{id} -> exists
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/exists/{id}", get(project::exists))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
}
