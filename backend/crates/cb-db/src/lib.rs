pub mod connection;
pub mod error;
pub mod repositories;
pub mod stores;

pub use connection::pool::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::owned_mutation::OwnedMutation;
pub use repositories::recipe_repository::RecipeRepository;
pub use repositories::user_repository::{UserRecord, UserRepository};
pub use stores::sqlite_credential_store::SqliteCredentialStore;
pub use stores::sqlite_recipe_store::SqliteRecipeStore;
