//! Resolves "who is signed in" from the stored token.

use crate::validation::{
    ValidationRules, normalize_display_name, normalize_email, require_password,
    validate_new_password,
};
use crate::{AuthSession, CoreError, CredentialStore, Identity, Result as CoreErrorResult, SessionStorage};

use std::sync::Arc;

use log::{debug, info, warn};

pub struct SessionManager {
    credentials: Arc<dyn CredentialStore>,
    storage: Arc<dyn SessionStorage>,
    rules: ValidationRules,
}

impl SessionManager {
    pub fn new(credentials: Arc<dyn CredentialStore>, storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_rules(credentials, storage, ValidationRules::default())
    }

    pub fn with_rules(
        credentials: Arc<dyn CredentialStore>,
        storage: Arc<dyn SessionStorage>,
        rules: ValidationRules,
    ) -> Self {
        Self {
            credentials,
            storage,
            rules,
        }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// The signed-in identity, or `None`.
    ///
    /// A rejected token is cleared. A store outage yields `None` but keeps the
    /// token so the next call can try again.
    pub async fn current_identity(&self) -> Option<Identity> {
        let token = match self.storage.load() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read session token: {e}");
                return None;
            }
        };

        match self.credentials.resolve(&token).await {
            Ok(identity) => Some(identity),
            Err(e @ CoreError::InvalidToken { .. }) => {
                debug!("Discarding stored session: {e}");
                if let Err(clear_err) = self.storage.clear() {
                    warn!("Could not clear session token: {clear_err}");
                }
                None
            }
            Err(e) => {
                warn!("Session lookup failed, keeping token: {e}");
                None
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> CoreErrorResult<Identity> {
        let email = normalize_email(email)?;
        require_password(password)?;

        let session = self.credentials.authenticate(&email, password).await?;
        self.remember(session)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> CoreErrorResult<Identity> {
        let email = normalize_email(email)?;
        validate_new_password(password, &self.rules)?;
        let display_name = normalize_display_name(display_name);

        let session = self
            .credentials
            .register(&email, password, &display_name)
            .await?;
        self.remember(session)
    }

    pub fn sign_out(&self) -> CoreErrorResult<()> {
        self.storage.clear()?;
        info!("Signed out");
        Ok(())
    }

    fn remember(&self, session: AuthSession) -> CoreErrorResult<Identity> {
        self.storage.store(&session.token)?;
        info!("Signed in as {}", session.identity.email);
        Ok(session.identity)
    }
}
