use cb_core::Recipe;

use serde::Serialize;

/// Recipe DTO for JSON serialization. Timestamps are Unix milliseconds.
#[derive(Debug, Serialize)]
pub struct RecipeDto {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: String,
    pub image: Option<String>,
    pub owner_id: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl From<Recipe> for RecipeDto {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title,
            ingredients: r.ingredients,
            steps: r.steps,
            image: r.image,
            owner_id: r.owner_id.to_string(),
            created_at: r.created_at.timestamp_millis(),
            updated_at: r.updated_at.map(|t| t.timestamp_millis()),
        }
    }
}
