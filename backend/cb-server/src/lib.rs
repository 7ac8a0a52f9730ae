pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, me, register},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        me_response::MeResponse,
        register_request::RegisterRequest,
        user_dto::UserDto,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    recipes::{
        list_recipes_query::ListRecipesQuery,
        recipe_dto::RecipeDto,
        recipe_list_response::RecipeListResponse,
        recipe_request::RecipeRequest,
        recipe_response::RecipeResponse,
        recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
