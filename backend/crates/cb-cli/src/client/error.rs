use cb_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Unexpected response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(code: String, message: String, field: Option<String>) -> Self {
        ClientError::Api {
            code,
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        ClientError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

/// Map server error codes back onto the core taxonomy.
///
/// Transport and decoding failures, and any code this client does not know,
/// count as the store being unavailable.
impl From<ClientError> for CoreError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api {
                code,
                message,
                field,
                ..
            } => match code.as_str() {
                "UNAUTHENTICATED" => CoreError::unauthenticated(),
                "INVALID_TOKEN" => CoreError::invalid_token(message),
                "INVALID_CREDENTIALS" => CoreError::invalid_credentials(),
                "FORBIDDEN" => CoreError::forbidden(message),
                "NOT_FOUND" => CoreError::not_found(message),
                "VALIDATION_ERROR" | "BAD_REQUEST" => {
                    CoreError::invalid_input(field.unwrap_or_else(|| "request".to_string()), message)
                }
                "DUPLICATE_ACCOUNT" => CoreError::duplicate_account(message),
                _ => CoreError::store_unavailable(format!("{code}: {message}")),
            },
            other => CoreError::store_unavailable(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
