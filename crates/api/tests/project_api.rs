//! Integration tests for `/Project` owner-scoped CRUD.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, delete_auth, get_auth, login, post_json_auth, put_json_auth,
    seed_admin,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_projects(pool: PgPool) {
    seed_admin(&pool).await;
    let (_user, password) = create_test_user(&pool, "builder").await;
    let app = common::build_test_app(pool);
    let token = login(&app, "builder", &password).await;

    let response = post_json_auth(
        &app,
        "/Project",
        serde_json::json!({ "name": "Reading list" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["name"], "Reading list");

    let response = get_auth(&app, "/Project", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

/// Project names are unique per user, not globally.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_name_unique_per_user(pool: PgPool) {
    seed_admin(&pool).await;
    let (_a, password_a) = create_test_user(&pool, "anna").await;
    let (_b, password_b) = create_test_user(&pool, "bert").await;
    let app = common::build_test_app(pool);

    let token_a = login(&app, "anna", &password_a).await;
    let token_b = login(&app, "bert", &password_b).await;

    let body = serde_json::json!({ "name": "Research" });
    let response = post_json_auth(&app, "/Project", body.clone(), &token_a).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same name, same user: rejected.
    let response = post_json_auth(&app, "/Project", body.clone(), &token_a).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Project 'Research' already exists for this user."
    );

    // Same name, different user: fine.
    let response = post_json_auth(&app, "/Project", body, &token_b).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// A project belonging to someone else behaves as absent.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_project_is_invisible(pool: PgPool) {
    seed_admin(&pool).await;
    let (_a, password_a) = create_test_user(&pool, "owner").await;
    let (_b, password_b) = create_test_user(&pool, "intruder").await;
    let app = common::build_test_app(pool);

    let token_a = login(&app, "owner", &password_a).await;
    let token_b = login(&app, "intruder", &password_b).await;

    let response = post_json_auth(
        &app,
        "/Project",
        serde_json::json!({ "name": "Private" }),
        &token_a,
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = get_auth(&app, &format!("/Project/{id}"), &token_b).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json_auth(
        &app,
        &format!("/Project/{id}"),
        serde_json::json!({ "name": "Hijacked" }),
        &token_b,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(&app, &format!("/Project/{id}"), &token_b).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Still there for the owner.
    let response = get_auth(&app, &format!("/Project/{id}"), &token_a).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project(pool: PgPool) {
    seed_admin(&pool).await;
    let (_user, password) = create_test_user(&pool, "editor").await;
    let app = common::build_test_app(pool);
    let token = login(&app, "editor", &password).await;

    let response = post_json_auth(
        &app,
        "/Project",
        serde_json::json!({ "name": "Old name" }),
        &token,
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json_auth(
        &app,
        &format!("/Project/{id}"),
        serde_json::json!({ "name": "New name" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "New name");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_project_is_404(pool: PgPool) {
    seed_admin(&pool).await;
    let (_user, password) = create_test_user(&pool, "confused").await;
    let app = common::build_test_app(pool);
    let token = login(&app, "confused", &password).await;

    let response = put_json_auth(
        &app,
        "/Project/424242",
        serde_json::json!({ "name": "Whatever" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Project with ID 424242 not found");
}

/// The existence check is owner-scoped like every other read.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_exists_endpoint(pool: PgPool) {
    seed_admin(&pool).await;
    let (_a, password_a) = create_test_user(&pool, "haver").await;
    let (_b, password_b) = create_test_user(&pool, "havenot").await;
    let app = common::build_test_app(pool);

    let token_a = login(&app, "haver", &password_a).await;
    let token_b = login(&app, "havenot", &password_b).await;

    let response = post_json_auth(
        &app,
        "/Project",
        serde_json::json!({ "name": "Checkable" }),
        &token_a,
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = get_auth(&app, &format!("/Project/exists/{id}"), &token_a).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!(true));

    let response = get_auth(&app, &format!("/Project/exists/{id}"), &token_b).await;
    assert_eq!(body_json(response).await, serde_json::json!(false));

    let response = get_auth(&app, "/Project/exists/555555", &token_a).await;
    assert_eq!(body_json(response).await, serde_json::json!(false));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project(pool: PgPool) {
    seed_admin(&pool).await;
    let (_user, password) = create_test_user(&pool, "cleaner").await;
    let app = common::build_test_app(pool);
    let token = login(&app, "cleaner", &password).await;

    let response = post_json_auth(
        &app,
        "/Project",
        serde_json::json!({ "name": "Ephemeral" }),
        &token,
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete_auth(&app, &format!("/Project/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again is a plain 404, not an error.
    let response = delete_auth(&app, &format!("/Project/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
