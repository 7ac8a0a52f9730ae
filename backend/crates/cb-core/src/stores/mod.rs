pub mod credential_store;
pub mod memory_recipe_store;
pub mod memory_session_storage;
pub mod recipe_store;
pub mod session_storage;
