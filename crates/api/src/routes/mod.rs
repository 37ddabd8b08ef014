pub mod auth;
pub mod health;
pub mod label;
pub mod link;
pub mod profile;
pub mod project;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Paths keep their capitalized form for drop-in compatibility with
/// existing clients:
///
/// ```text
/// /Auth                              login (public)
///
/// /User                              list, create (admin)
/// /User/me                           caller's own account
/// /User/check-username/{username}    username availability
/// /User/{id}                         get (self only), update, delete (admin)
///
/// /Project, /Project/{id}            owner-scoped CRUD
/// /Project/exists/{id}               existence check
/// /Label, /Label/{id}                global CRUD
///
/// /Link, /Link/{id}                  owner-scoped CRUD
/// /Link/exists/{id}                  existence check
/// /Link/{id}/favorite                favorite toggle (PATCH, raw bool body)
/// /Link/search                       filtered search (POST)
///
/// /Profile                           get, update own account
/// /Profile/Password                  change own password
/// ```
///
/// Health probes are mounted separately in [`health`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/Auth", auth::router())
        .nest("/User", user::router())
        .nest("/Project", project::router())
        .nest("/Label", label::router())
        .nest("/Link", link::router())
        .nest("/Profile", profile::router())
}
