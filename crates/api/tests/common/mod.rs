//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real application router (same middleware stack as
//! production) through `tower::ServiceExt::oneshot`, against the
//! per-test database that `#[sqlx::test]` provides.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use linkvault_api::auth::jwt::JwtConfig;
use linkvault_api::auth::password::hash_password;
use linkvault_api::config::ServerConfig;
use linkvault_api::router::build_app_router;
use linkvault_api::state::AppState;
use linkvault_db::models::user::User;
use linkvault_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret
/// (long enough to pass the 32-character minimum).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-0123456789abcdef".to_string(),
            issuer: "LinkVault".to_string(),
            audience: "LinkVault".to_string(),
            expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors the construction in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seed the admin user (id 1, username `admin`, password `admin`) the way
/// the binary does at startup.
pub async fn seed_admin(pool: &PgPool) {
    let hash = hash_password("admin").expect("hashing should succeed");
    linkvault_db::seed::ensure_admin_user(pool, &hash)
        .await
        .expect("admin seeding should succeed");
}

/// Create a regular user directly in the database, returning the row and
/// the plaintext password.
pub async fn create_test_user(pool: &PgPool, username: &str) -> (User, String) {
    let password = "test_password_123!";
    let hash = hash_password(password).expect("hashing should succeed");
    let user = UserRepo::create(pool, "Test User", username, &hash)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in through the API and return the bearer token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/Auth", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain token")
        .to_string()
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.clone()
        .oneshot(request)
        .await
        .expect("request should complete")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn patch_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
