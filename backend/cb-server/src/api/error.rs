//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a status derived from the core error taxonomy.

use cb_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Safe to show to the user
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401. `code` distinguishes a missing session from a rejected one.
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 400, malformed request syntax
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 409
    #[error("Duplicate account: {message} {location}")]
    DuplicateAccount {
        message: String,
        location: ErrorLocation,
    },

    /// 503
    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::DuplicateAccount { .. } => StatusCode::CONFLICT,
            ApiError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized { code, .. } => *code,
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::DuplicateAccount { .. } => "DUPLICATE_ACCOUNT",
            ApiError::Unavailable { .. } => "STORE_UNAVAILABLE",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let code = self.code().to_string();
        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::DuplicateAccount { message, .. }
            | ApiError::Unavailable { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorBody {
            code,
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Core failures keep their user-facing text; internals stay in the log.
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        log::debug!("Core error: {}", e);
        let location = ErrorLocation::from(Location::caller());
        let message = e.user_message();

        match e {
            CoreError::Unauthenticated { .. } => ApiError::Unauthorized {
                code: "UNAUTHENTICATED",
                message,
                location,
            },
            CoreError::InvalidToken { .. } => ApiError::Unauthorized {
                code: "INVALID_TOKEN",
                message,
                location,
            },
            CoreError::InvalidCredentials { .. } => ApiError::Unauthorized {
                code: "INVALID_CREDENTIALS",
                message,
                location,
            },
            CoreError::Forbidden { .. } => ApiError::Forbidden { message, location },
            CoreError::NotFound { .. } => ApiError::NotFound { message, location },
            CoreError::InvalidInput { field, .. } => ApiError::Validation {
                message,
                field: Some(field),
                location,
            },
            CoreError::DuplicateAccount { .. } => ApiError::DuplicateAccount { message, location },
            CoreError::StoreUnavailable { .. } => ApiError::Unavailable { message, location },
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: Some("id".into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
