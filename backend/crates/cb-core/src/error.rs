use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Not signed in {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid input for '{field}': {message} {location}")]
    InvalidInput {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Account already exists: {email} {location}")]
    DuplicateAccount {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store_unavailable<S: Into<String>>(message: S) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_account<S: Into<String>>(email: S) -> Self {
        Self::DuplicateAccount {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_token<S: Into<String>>(message: S) -> Self {
        Self::InvalidToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code, shared with the REST error body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::InvalidInput { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            Self::DuplicateAccount { .. } => "DUPLICATE_ACCOUNT",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
        }
    }

    /// Field name for input errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// The caller should send the user to the sign-in flow.
    pub fn requires_sign_in(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated { .. } | Self::InvalidToken { .. }
        )
    }

    /// Text suitable for showing to the user. Never includes source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthenticated { .. } => "Please sign in to continue.".to_string(),
            Self::Forbidden { .. } => "You can only change your own recipes.".to_string(),
            Self::InvalidInput { message, .. } => message.clone(),
            Self::NotFound { .. } => {
                "This recipe no longer exists. The list has been refreshed.".to_string()
            }
            Self::StoreUnavailable { .. } => {
                "Could not reach the recipe service. Please try again.".to_string()
            }
            Self::DuplicateAccount { .. } => {
                "An account with this email already exists.".to_string()
            }
            Self::InvalidCredentials { .. } => "Wrong email or password.".to_string(),
            Self::InvalidToken { .. } => "Your session has expired. Please sign in again.".to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
