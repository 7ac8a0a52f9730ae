use crate::UserDto;

use cb_core::AuthSession;

use serde::Serialize;

/// Register and login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: session.identity.into(),
        }
    }
}
