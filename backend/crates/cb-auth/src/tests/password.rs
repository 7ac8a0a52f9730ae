use crate::{AuthError, hash_password, verify_password};

use cb_core::CoreError;

#[test]
fn given_hashed_password_when_verified_with_same_password_then_ok() {
    let hash = hash_password("correct horse").unwrap();

    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("correct horse", &hash).is_ok());
}

#[test]
fn given_hashed_password_when_verified_with_other_password_then_invalid_credentials() {
    let hash = hash_password("correct horse").unwrap();

    let result = verify_password("battery staple", &hash);

    assert!(matches!(result, Err(AuthError::InvalidCredentials { .. })));
}

#[test]
fn given_same_password_when_hashed_twice_then_salts_differ() {
    let first = hash_password("pw-123456").unwrap();
    let second = hash_password("pw-123456").unwrap();

    assert_ne!(first, second);
}

#[test]
fn given_corrupt_hash_when_verified_then_invalid_credentials() {
    let result = verify_password("anything", "not-a-phc-string");

    let core: CoreError = result.unwrap_err().into();
    assert_eq!(core.code(), "INVALID_CREDENTIALS");
}
