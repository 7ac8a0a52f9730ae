use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,

    /// Optional; the email is shown when blank
    #[serde(default)]
    pub display_name: String,
}
