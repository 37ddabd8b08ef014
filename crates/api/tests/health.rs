//! Integration tests for the `/Health` probes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_returns_healthy(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/Health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_detailed_reports_database(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/Health/detailed").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "connected");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_liveness_and_readiness(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/Health/live").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/Health/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_requires_no_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    // No Authorization header anywhere.
    for uri in ["/Health", "/Health/detailed", "/Health/live", "/Health/ready"] {
        let response = get(&app, uri).await;
        assert_ne!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{uri} must be public"
        );
    }
}
