//! Argon2id password hashing.

use crate::{AuthError, Result as AuthErrorResult};

use cb_core::ErrorLocation;

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a password into a PHC string.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Verify a password against a stored PHC string.
///
/// An unparseable hash is treated as a mismatch.
#[track_caller]
pub fn verify_password(password: &str, hash: &str) -> AuthErrorResult<()> {
    let caller = Location::caller();
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials {
        location: ErrorLocation::from(caller),
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials {
            location: ErrorLocation::from(caller),
        })
}
