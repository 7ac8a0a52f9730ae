use crate::ApiError;

use cb_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Recipe not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Recipe not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_invalid_input_becomes_400_with_field() {
    let error: ApiError = CoreError::invalid_input("title", "Enter a recipe title.").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
    assert_eq!(json["error"]["message"], "Enter a recipe title.");
}

#[tokio::test]
async fn test_unauthenticated_and_invalid_token_are_both_401_with_distinct_codes() {
    let (status, json) = body_json(CoreError::unauthenticated().into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");

    let (status, json) = body_json(CoreError::invalid_token("expired").into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_invalid_credentials_returns_401() {
    let (status, json) = body_json(CoreError::invalid_credentials().into()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_forbidden_returns_403_without_internal_detail() {
    let error: ApiError = CoreError::forbidden("Recipe 123 is not owned by 456").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert!(!json["error"]["message"].as_str().unwrap().contains("456"));
}

#[tokio::test]
async fn test_duplicate_account_returns_409() {
    let (status, json) = body_json(CoreError::duplicate_account("a@b.co").into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "DUPLICATE_ACCOUNT");
}

#[tokio::test]
async fn test_store_unavailable_returns_503() {
    let (status, json) = body_json(CoreError::store_unavailable("pool closed").into()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "STORE_UNAVAILABLE");
    assert!(!json["error"]["message"].as_str().unwrap().contains("pool"));
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Unexpected failure".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();

    let api_err: ApiError = uuid_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Invalid UUID"));
            assert_eq!(field.as_deref(), Some("id"));
        }
        _ => panic!("Expected Validation error"),
    }
}
