#![allow(dead_code)]

//! Test infrastructure for cb-server API tests

use cb_core::ValidationRules;
use cb_db::{SqliteCredentialStore, SqliteRecipeStore, connect_in_memory};
use cb_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"server-test-secret-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "secret-password";

/// AppState backed by in-memory SQLite
pub async fn create_test_app_state() -> AppState {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState {
        credentials: Arc::new(SqliteCredentialStore::new(pool.clone(), TEST_SECRET)),
        recipes: Arc::new(SqliteRecipeStore::new(pool.clone())),
        pool,
    }
}

pub async fn create_test_router() -> Router {
    build_router(
        create_test_app_state().await,
        64,
        ValidationRules::default().max_request_bytes(),
    )
}

/// Send one request and decode the JSON response body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Register an account, returning (token, user id)
pub async fn register(app: &Router, email: &str, display_name: &str) -> (String, String) {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/register",
        None,
        Some(json!({
            "email": email,
            "password": TEST_PASSWORD,
            "display_name": display_name,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {json}");

    (
        json["token"].as_str().unwrap().to_string(),
        json["user"]["id"].as_str().unwrap().to_string(),
    )
}

/// Create a recipe as `token`, returning its id
pub async fn create_recipe(app: &Router, token: &str, title: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/recipes",
        Some(token),
        Some(json!({
            "title": title,
            "ingredients": ["flour", "water", "salt"],
            "steps": "Mix and bake.",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {json}");

    json["recipe"]["id"].as_str().unwrap().to_string()
}
