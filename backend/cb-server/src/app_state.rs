use cb_core::{CredentialStore, RecipeStore};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialStore>,
    pub recipes: Arc<dyn RecipeStore>,
    /// Probed by the health endpoints
    pub pool: SqlitePool,
}
