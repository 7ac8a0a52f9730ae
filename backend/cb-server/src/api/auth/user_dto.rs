use cb_core::Identity;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl From<Identity> for UserDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.email,
            display_name: identity.display_name,
        }
    }
}
