use crate::{ConfigError, ConfigErrorResult, MAX_TOKEN_TTL_HOURS, MIN_JWT_SECRET_LENGTH};

use cb_core::DEFAULT_TOKEN_TTL_HOURS;
use cb_core::validation::DEFAULT_MIN_PASSWORD_LENGTH;

use serde::Deserialize;

const MAX_MIN_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. When unset the server generates one per run,
    /// so tokens do not survive a restart.
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref secret) = self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.token_ttl_hours < 1 || self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_hours must be 1-{}, got {}",
                MAX_TOKEN_TTL_HOURS, self.token_ttl_hours
            )));
        }

        if self.min_password_length < 1 || self.min_password_length > MAX_MIN_PASSWORD_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.min_password_length must be 1-{}, got {}",
                MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        Ok(())
    }
}
