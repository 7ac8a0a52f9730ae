use crate::Identity;

/// Result of a successful register or authenticate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub identity: Identity,
    /// Opaque credential to keep in session storage
    pub token: String,
}
