//! Route definitions for `/Profile`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// ```text
/// GET /           -> get
/// PUT /           -> update
/// PUT /Password   -> change_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get).put(profile::update))
        .route("/Password", put(profile::change_password))
}
