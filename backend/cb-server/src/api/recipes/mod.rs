pub mod list_recipes_query;
pub mod recipe_dto;
pub mod recipe_list_response;
pub mod recipe_request;
pub mod recipe_response;
#[allow(clippy::module_inception)]
pub mod recipes;
