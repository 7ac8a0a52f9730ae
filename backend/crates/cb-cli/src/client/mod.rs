pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod http_stores;
pub(crate) mod wire;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult};
pub use http_stores::{HttpCredentialStore, HttpRecipeStore};
