use crate::{AuthError, Result as AuthErrorResult};

use cb_core::ErrorLocation;

use std::panic::Location;

/// Pull the token out of an `Authorization: Bearer <token>` header value.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
