//! Route definitions for `/Label`.

use axum::routing::get;
use axum::Router;

use crate::handlers::label;
use crate::state::AppState;

/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(label::list).post(label::create))
        .route(
            "/{id}",
            get(label::get_by_id)
                .put(label::update)
                .delete(label::delete),
        )
}
