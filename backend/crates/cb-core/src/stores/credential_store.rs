use crate::{AuthSession, Identity, Result as CoreErrorResult};

/// Persists user records and verifies credentials.
///
/// Implementations receive an already normalized email.
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fails with `DuplicateAccount` when the email is taken.
    async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> CoreErrorResult<AuthSession>;

    /// Fails with `InvalidCredentials` for an unknown email or wrong password.
    async fn authenticate(&self, email: &str, password: &str) -> CoreErrorResult<AuthSession>;

    /// Fails with `InvalidToken` when the token is expired, malformed or
    /// names an identity that no longer exists.
    async fn resolve(&self, token: &str) -> CoreErrorResult<Identity>;
}
