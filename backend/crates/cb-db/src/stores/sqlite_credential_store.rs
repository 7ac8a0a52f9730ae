use crate::{DbError, UserRepository};

use cb_auth::{JwtValidator, TokenIssuer, hash_password, verify_password};
use cb_core::validation::{normalize_email, validate_new_password};
use cb_core::{
    AuthSession, CoreError, CredentialStore, Identity, Result as CoreErrorResult,
    ValidationRules,
};

use chrono::Duration;
use log::{info, warn};
use sqlx::SqlitePool;

/// [`CredentialStore`] backed by the `users` table, issuing HS256 JWTs.
pub struct SqliteCredentialStore {
    users: UserRepository,
    issuer: TokenIssuer,
    validator: JwtValidator,
    rules: ValidationRules,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool, jwt_secret: &[u8]) -> Self {
        Self {
            users: UserRepository::new(pool),
            issuer: TokenIssuer::with_hs256(jwt_secret),
            validator: JwtValidator::with_hs256(jwt_secret),
            rules: ValidationRules::default(),
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.issuer = self.issuer.with_ttl(ttl);
        self
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    fn session_for(&self, identity: Identity) -> CoreErrorResult<AuthSession> {
        let token = self.issuer.issue(&identity)?;
        Ok(AuthSession { identity, token })
    }
}

#[async_trait::async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> CoreErrorResult<AuthSession> {
        let email = normalize_email(email)?;
        validate_new_password(password, &self.rules)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(CoreError::duplicate_account(email));
        }

        let password_hash = hash_password(password)?;
        let identity = Identity::new(email, display_name.trim().to_string());

        match self.users.create(&identity, &password_hash).await {
            Ok(()) => {}
            // Lost a race with a concurrent sign-up
            Err(DbError::Duplicate { .. }) => {
                return Err(CoreError::duplicate_account(identity.email));
            }
            Err(e) => return Err(e.into()),
        }

        info!("Registered {} ({})", identity.email, identity.id);
        self.session_for(identity)
    }

    async fn authenticate(&self, email: &str, password: &str) -> CoreErrorResult<AuthSession> {
        let email = normalize_email(email).map_err(|_| CoreError::invalid_credentials())?;

        let Some(record) = self.users.find_by_email(&email).await? else {
            warn!("Sign-in for unknown email {}", email);
            return Err(CoreError::invalid_credentials());
        };

        if verify_password(password, &record.password_hash).is_err() {
            warn!("Wrong password for {}", email);
            return Err(CoreError::invalid_credentials());
        }

        self.session_for(record.identity)
    }

    async fn resolve(&self, token: &str) -> CoreErrorResult<Identity> {
        let identity_id = self.validator.identity_id(token)?;

        self.users
            .find_by_id(identity_id)
            .await?
            .ok_or_else(|| CoreError::invalid_token(format!("Identity {identity_id} no longer exists")))
    }
}
