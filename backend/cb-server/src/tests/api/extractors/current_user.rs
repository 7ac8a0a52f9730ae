use crate::{ApiError, AppState, CurrentUser};

use cb_core::{CredentialStore, MemoryRecipeStore};
use cb_db::{SqliteCredentialStore, connect_in_memory};

use std::sync::Arc;

use axum::extract::FromRequestParts;
use http::Request;
use http::request::Parts;

const SECRET: &[u8] = b"extractor-test-secret-at-least-32-bytes";

async fn state() -> (AppState, Arc<SqliteCredentialStore>) {
    let pool = connect_in_memory().await.unwrap();
    let credentials = Arc::new(SqliteCredentialStore::new(pool.clone(), SECRET));
    let state = AppState {
        credentials: credentials.clone(),
        recipes: Arc::new(MemoryRecipeStore::new()),
        pool,
    };
    (state, credentials)
}

fn parts(authorization: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/v1/me");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(()).unwrap().into_parts().0
}

#[tokio::test]
async fn test_valid_bearer_token_yields_identity() {
    let (state, credentials) = state().await;
    let session = credentials
        .register("cook@example.com", "secret-password", "Cook")
        .await
        .unwrap();
    let mut parts = parts(Some(&format!("Bearer {}", session.token)));

    let CurrentUser(identity) = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(identity, session.identity);
}

#[tokio::test]
async fn test_missing_header_is_unauthenticated() {
    let (state, _credentials) = state().await;
    let mut parts = parts(None);

    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { code, .. }) => assert_eq!(code, "UNAUTHENTICATED"),
        _ => panic!("Expected Unauthorized"),
    }
}

#[tokio::test]
async fn test_garbage_token_is_invalid_token() {
    let (state, _credentials) = state().await;
    let mut parts = parts(Some("Bearer not.a.jwt"));

    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { code, .. }) => assert_eq!(code, "INVALID_TOKEN"),
        _ => panic!("Expected Unauthorized"),
    }
}
