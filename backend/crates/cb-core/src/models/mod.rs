pub mod auth_session;
pub mod identity;
pub mod list_order;
pub mod list_view;
pub mod recipe;
pub mod recipe_draft;
pub mod recipe_fields;
pub mod renderable_recipe;
