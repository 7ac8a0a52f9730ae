use cb_core::CoreError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
        }
    }
}

impl From<AuthError> for CoreError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingHeader { .. } | AuthError::InvalidScheme { .. } => {
                CoreError::unauthenticated()
            }
            AuthError::InvalidCredentials { .. } => CoreError::invalid_credentials(),
            AuthError::PasswordHash { .. } | AuthError::JwtEncode { .. } => {
                CoreError::store_unavailable(err.to_string())
            }
            AuthError::InvalidToken { .. }
            | AuthError::TokenExpired { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => CoreError::invalid_token(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
