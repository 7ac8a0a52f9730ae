pub mod confirmation;
pub mod error;
pub mod filter;
pub mod models;
pub mod recipe_form_controller;
pub mod recipe_list_controller;
pub mod session_manager;
pub mod stores;
pub mod validation;

pub use confirmation::Confirmation;
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use filter::apply_filter;
pub use models::auth_session::AuthSession;
pub use models::identity::Identity;
pub use models::list_order::ListOrder;
pub use models::list_view::ListView;
pub use models::recipe::Recipe;
pub use models::recipe_draft::RecipeDraft;
pub use models::recipe_fields::RecipeFields;
pub use models::renderable_recipe::RenderableRecipe;
pub use recipe_form_controller::{DeleteOutcome, RecipeFormController};
pub use recipe_list_controller::RecipeListController;
pub use session_manager::SessionManager;
pub use stores::credential_store::CredentialStore;
pub use stores::memory_recipe_store::MemoryRecipeStore;
pub use stores::memory_session_storage::MemorySessionStorage;
pub use stores::recipe_store::RecipeStore;
pub use stores::session_storage::SessionStorage;
pub use validation::ValidationRules;

/// Default session lifetime.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24 * 7;

#[cfg(test)]
mod tests;
