use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user as seen by the rest of the application.
///
/// Created at sign-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
}

impl Identity {
    pub fn new(email: String, display_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
        }
    }

    /// Name to greet the user with, falling back to the email.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.email
        } else {
            &self.display_name
        }
    }
}
