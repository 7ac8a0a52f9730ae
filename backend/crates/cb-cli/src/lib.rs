//! cb-cli library
//!
//! Client-side backends for the `cb` binary: the REST client and its
//! store adapters, a local-only JSON store and the session token file.

pub mod app;
pub mod cli;
pub mod client;
pub mod commands;
pub mod confirmation;
pub mod local_store;
pub mod session_file;

#[cfg(test)]
mod tests;

pub use app::App;
pub use client::{CliClientResult, Client, ClientError, HttpCredentialStore, HttpRecipeStore};
pub use confirmation::StdinConfirmation;
pub use local_store::LocalStore;
pub use session_file::FileSessionStorage;

/// Session token file inside the config directory.
pub const SESSION_FILE_NAME: &str = "session.json";
/// Local-only mode keeps its own token so it is never sent to a server.
pub const LOCAL_SESSION_FILE_NAME: &str = "local_session.json";
pub const LOCAL_STORE_FILE_NAME: &str = "local_store.json";
