//! HTTP-level integration tests for signup and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use recordshop_api::auth::jwt::validate_token;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_returns_created_user_without_hash(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        json!({ "email": "digger@example.com", "password": "long-enough" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["email"], "digger@example.com");
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_signup_is_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "twice@example.com", "password": "long-enough" });

    let first = post_json(app.clone(), "/api/v1/auth/signup", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_rejects_invalid_email_and_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/signup",
        json!({ "email": "not-an-email", "password": "long-enough" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json(
        app,
        "/api/v1/auth/signup",
        json!({ "email": "short@example.com", "password": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_bearer_token_for_the_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let credentials = json!({ "email": "login@example.com", "password": "long-enough" });

    let signup = post_json(app.clone(), "/api/v1/auth/signup", credentials.clone()).await;
    let user_id = body_json(signup).await["id"].as_i64().unwrap();

    let response = post_json(app, "/api/v1/auth/login", credentials).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["expires_in"], 12 * 3600);

    let token = json["access_token"].as_str().unwrap();
    let claims = validate_token(token, &common::test_config().jwt).unwrap();
    assert_eq!(claims.sub, user_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_or_unknown_email_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(
        app.clone(),
        "/api/v1/auth/signup",
        json!({ "email": "real@example.com", "password": "long-enough" }),
    )
    .await;

    let wrong_password = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "real@example.com", "password": "not-the-one" }),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "ghost@example.com", "password": "long-enough" }),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(unknown).await["error"], "Invalid email or password");
}
