use crate::validation::ValidationRules;
use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// The user-editable part of a recipe, as sent to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFields {
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl RecipeFields {
    /// Trim every field, drop blank ingredients and blank images, then check limits.
    #[track_caller]
    pub fn normalized(self, rules: &ValidationRules) -> CoreErrorResult<Self> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(CoreError::invalid_input("title", "Enter a recipe title."));
        }
        if title.chars().count() > rules.max_title_length {
            return Err(CoreError::invalid_input(
                "title",
                format!(
                    "Title must be at most {} characters.",
                    rules.max_title_length
                ),
            ));
        }

        let ingredients: Vec<String> = self
            .ingredients
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(String::from)
            .collect();
        if ingredients.len() > rules.max_ingredients {
            return Err(CoreError::invalid_input(
                "ingredients",
                format!("At most {} ingredients are allowed.", rules.max_ingredients),
            ));
        }
        if ingredients
            .iter()
            .any(|i| i.chars().count() > rules.max_ingredient_length)
        {
            return Err(CoreError::invalid_input(
                "ingredients",
                format!(
                    "Each ingredient must be at most {} characters.",
                    rules.max_ingredient_length
                ),
            ));
        }

        let steps = self.steps.trim().to_string();
        if steps.chars().count() > rules.max_steps_length {
            return Err(CoreError::invalid_input(
                "steps",
                format!(
                    "Steps must be at most {} characters.",
                    rules.max_steps_length
                ),
            ));
        }

        let image = self
            .image
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty());
        if let Some(ref image) = image
            && image.len() > rules.max_image_length
        {
            return Err(CoreError::invalid_input(
                "image",
                format!("Image must be at most {} bytes.", rules.max_image_length),
            ));
        }

        Ok(Self {
            title,
            ingredients,
            steps,
            image,
        })
    }
}
