//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use cb_auth::bearer_token;
use cb_core::{CoreError, Identity};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use http::header::AUTHORIZATION;

/// The identity behind the request's `Authorization: Bearer <token>` header.
///
/// Rejects with 401 `UNAUTHENTICATED` when the header is missing and
/// `INVALID_TOKEN` when the credential store refuses the token.
pub struct CurrentUser(pub Identity);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header).map_err(CoreError::from)?;
            let identity = state.credentials.resolve(token).await?;

            log::debug!("Authenticated request as {}", identity.id);
            Ok(CurrentUser(identity))
        }
    }
}
