//! Route definitions for `/User`.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// GET    /                            -> list
/// POST   /                            -> create (admin)
/// GET    /me                          -> me
/// GET    /check-username/{username}   -> check_username
/// GET    /{id}                        -> get_by_id (self only)
/// PUT    /{id}                        -> update (admin)
/// DELETE /{id}                        -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route("/me", get(user::me))
        .route("/check-username/{username}", get(user::check_username))
        .route(
            "/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
}
