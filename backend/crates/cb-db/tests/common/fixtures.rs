use cb_core::{Recipe, RecipeFields};

use chrono::Duration;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Creates test RecipeFields with sensible defaults
pub fn create_test_fields(title: &str) -> RecipeFields {
    RecipeFields {
        title: title.to_string(),
        ingredients: vec!["flour".to_string(), "water".to_string(), "salt".to_string()],
        steps: "Mix, rest, bake.".to_string(),
        image: None,
    }
}

/// Creates a test Recipe created `minutes_ago`
pub fn create_test_recipe(owner_id: Uuid, title: &str, minutes_ago: i64) -> Recipe {
    let mut recipe = Recipe::new(owner_id, create_test_fields(title));
    recipe.created_at = recipe.created_at - Duration::minutes(minutes_ago);
    recipe
}
