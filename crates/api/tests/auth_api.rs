//! Integration tests for `/Auth` login and token handling.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get_auth, post_json, seed_admin};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "loginuser", "password": password });
    let response = post_json(&app, "/Auth", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain token");
    assert!(json["expires"].is_string(), "response must contain expires");
    assert_eq!(json["name"], "Test User");
    assert_eq!(json["isAdmin"], user.id == 1);
}

/// Wrong password and unknown username fail with the same message, so the
/// response does not reveal which part was wrong.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_failures_are_indistinguishable(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "victim").await;
    let app = common::build_test_app(pool);

    let wrong_password = post_json(
        &app,
        "/Auth",
        serde_json::json!({ "username": "victim", "password": "incorrect" }),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let a = body_json(wrong_password).await;

    let unknown_user = post_json(
        &app,
        "/Auth",
        serde_json::json!({ "username": "ghost", "password": "whatever" }),
    )
    .await;
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    let b = body_json(unknown_user).await;

    assert_eq!(a["message"], "Invalid username or password");
    assert_eq!(a["message"], b["message"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_blank_credentials(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/Auth",
        serde_json::json!({ "username": "   ", "password": "whatever" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Username cannot be empty");

    let response = post_json(
        &app,
        "/Auth",
        serde_json::json!({ "username": "someone", "password": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Password cannot be empty");
}

/// The seeded admin can log in with admin/admin; its token carries id 1.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_seeded_admin_login(pool: PgPool) {
    seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/Auth",
        serde_json::json!({ "username": "admin", "password": "admin" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Administrator");
    assert_eq!(json["isAdmin"], true);

    let config = common::test_config();
    let claims =
        linkvault_api::auth::jwt::validate_token(json["token"].as_str().unwrap(), &config.jwt)
            .expect("token must validate");
    assert_eq!(claims.sub, "1");
    assert_eq!(claims.unique_name, "admin");
}

/// Seeding twice never overwrites the admin row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_seed_is_idempotent(pool: PgPool) {
    seed_admin(&pool).await;
    seed_admin(&pool).await;

    let users = linkvault_db::repositories::UserRepo::list(&pool)
        .await
        .expect("listing should succeed");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].username, "admin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_rejects_missing_header(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(&app, "/Link").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Authorization header not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_rejects_garbage_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(&app, "/Link", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid JWT token");
}

/// Tokens signed for a different issuer/audience are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_issuer_token_rejected(pool: PgPool) {
    let (user, _password) = create_test_user(&pool, "issuercheck").await;
    let app = common::build_test_app(pool);

    let mut config = common::test_config().jwt;
    config.issuer = "SomeoneElse".to_string();
    let (token, _) = linkvault_api::auth::jwt::issue_token(user.id, "issuercheck", &config)
        .expect("issuance should succeed");

    let response = get_auth(&app, "/Link", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
