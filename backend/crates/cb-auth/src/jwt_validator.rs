use crate::{AuthError, Claims, Result as AuthErrorResult};

use cb_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use uuid::Uuid;

/// Clock skew tolerated when checking `exp`, in seconds.
pub const TOKEN_LEEWAY_SECS: u64 = 30;

/// Verifies session tokens issued by [`crate::TokenIssuer`].
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = TOKEN_LEEWAY_SECS;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Check signature and expiry, then the claim contents.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());

        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                return Err(AuthError::TokenExpired { location });
            }
            Err(source) => return Err(AuthError::JwtDecode { source, location }),
        };

        claims.validate()?;
        Ok(claims)
    }

    /// Identity id carried by a valid token.
    #[track_caller]
    pub fn identity_id(&self, token: &str) -> AuthErrorResult<Uuid> {
        self.validate(token)?.identity_id()
    }
}
