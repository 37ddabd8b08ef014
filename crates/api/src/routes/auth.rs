//! Route definitions for `/Auth`.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST / -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(auth::login))
}
