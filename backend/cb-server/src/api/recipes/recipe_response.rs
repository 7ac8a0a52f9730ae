use crate::RecipeDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub recipe: RecipeDto,
}
