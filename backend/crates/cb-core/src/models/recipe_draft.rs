use crate::validation::{ValidationRules, parse_ingredients};
use crate::{Recipe, RecipeFields, Result as CoreErrorResult};

/// Raw form input before validation.
///
/// `ingredients` is the multi-line text box, one ingredient per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub image: Option<String>,
}

impl RecipeDraft {
    /// Prefill the editor from an existing recipe.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.join("\n"),
            steps: recipe.steps.clone(),
            image: recipe.image.clone(),
        }
    }

    #[track_caller]
    pub fn into_fields(self, rules: &ValidationRules) -> CoreErrorResult<RecipeFields> {
        RecipeFields {
            title: self.title,
            ingredients: parse_ingredients(&self.ingredients),
            steps: self.steps,
            image: self.image,
        }
        .normalized(rules)
    }
}
