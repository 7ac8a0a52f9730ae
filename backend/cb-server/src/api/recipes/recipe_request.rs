use cb_core::RecipeFields;

use serde::Deserialize;

/// Body of create and update; the store trims and validates it.
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub title: String,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub steps: String,

    /// URI or data URI
    #[serde(default)]
    pub image: Option<String>,
}

impl From<RecipeRequest> for RecipeFields {
    fn from(req: RecipeRequest) -> Self {
        Self {
            title: req.title,
            ingredients: req.ingredients,
            steps: req.steps,
            image: req.image,
        }
    }
}
