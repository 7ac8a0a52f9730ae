use crate::{AuthError, Claims, DEFAULT_TOKEN_TTL_HOURS, Result as AuthErrorResult};

use cb_core::{ErrorLocation, Identity};

use std::panic::Location;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs HS256 session tokens for authenticated identities.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.id.to_string(),
            email: Some(identity.email.clone()),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
