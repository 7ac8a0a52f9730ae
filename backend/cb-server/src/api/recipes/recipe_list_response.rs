use crate::RecipeDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeDto>,
}
