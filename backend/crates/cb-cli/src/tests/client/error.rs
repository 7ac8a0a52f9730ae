use crate::ClientError;

use cb_core::CoreError;

use googletest::assert_that;
use googletest::prelude::{eq, some};

fn api(code: &str, field: Option<&str>) -> CoreError {
    ClientError::api_error(
        code.to_string(),
        "server says no".to_string(),
        field.map(String::from),
    )
    .into()
}

#[test]
fn given_auth_codes_when_mapped_then_sign_in_is_required() {
    assert_that!(api("UNAUTHENTICATED", None).requires_sign_in(), eq(true));
    assert_that!(api("INVALID_TOKEN", None).requires_sign_in(), eq(true));
    assert_that!(api("INVALID_CREDENTIALS", None).code(), eq("INVALID_CREDENTIALS"));
}

#[test]
fn given_validation_code_with_field_when_mapped_then_field_is_kept() {
    // When
    let error = api("VALIDATION_ERROR", Some("title"));

    // Then
    assert_that!(error.code(), eq("VALIDATION_ERROR"));
    assert_that!(error.field(), some(eq("title")));
}

#[test]
fn given_ownership_and_missing_codes_when_mapped_then_variants_match() {
    assert_that!(api("FORBIDDEN", None).code(), eq("FORBIDDEN"));
    assert_that!(api("NOT_FOUND", None).code(), eq("NOT_FOUND"));
    assert_that!(api("DUPLICATE_ACCOUNT", None).code(), eq("DUPLICATE_ACCOUNT"));
}

#[test]
fn given_unknown_code_when_mapped_then_store_unavailable() {
    // When
    let error = api("INTERNAL_ERROR", None);

    // Then
    assert_that!(error.code(), eq("STORE_UNAVAILABLE"));
}

#[test]
fn given_decode_failure_when_mapped_then_store_unavailable() {
    // When
    let error: CoreError = ClientError::decode("missing field `recipes`").into();

    // Then
    assert_that!(error.code(), eq("STORE_UNAVAILABLE"));
}
