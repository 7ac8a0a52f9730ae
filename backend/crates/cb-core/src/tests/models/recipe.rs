use crate::{CoreError, Recipe, RecipeFields, ValidationRules};

use uuid::Uuid;

fn fields(title: &str) -> RecipeFields {
    RecipeFields {
        title: title.to_string(),
        ingredients: vec!["flour".to_string(), "water".to_string()],
        steps: "Mix.".to_string(),
        image: None,
    }
}

#[test]
fn test_recipe_new() {
    let owner = Uuid::new_v4();
    let recipe = Recipe::new(owner, fields("Bread"));

    assert_eq!(recipe.title, "Bread");
    assert_eq!(recipe.ingredients, vec!["flour", "water"]);
    assert_eq!(recipe.owner_id, owner);
    assert!(recipe.updated_at.is_none());
    assert_eq!(recipe.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
}

#[test]
fn test_recipe_ensure_owner() {
    let owner = Uuid::new_v4();
    let recipe = Recipe::new(owner, fields("Bread"));

    assert!(recipe.ensure_owner(owner).is_ok());
    assert!(matches!(
        recipe.ensure_owner(Uuid::new_v4()),
        Err(CoreError::Forbidden { .. })
    ));
}

#[test]
fn test_recipe_apply_keeps_owner_and_creation_time() {
    let owner = Uuid::new_v4();
    let mut recipe = Recipe::new(owner, fields("Bread"));
    let created_at = recipe.created_at;
    let id = recipe.id;

    recipe.apply(fields("Sourdough"));

    assert_eq!(recipe.title, "Sourdough");
    assert_eq!(recipe.id, id);
    assert_eq!(recipe.owner_id, owner);
    assert_eq!(recipe.created_at, created_at);
    assert!(recipe.updated_at.is_some());
}

#[test]
fn test_recipe_deserializes_without_optional_fields() {
    let owner = Uuid::new_v4();
    let json = serde_json::json!({
        "id": Uuid::new_v4(),
        "title": "Soup",
        "ingredients": ["leek"],
        "steps": "Boil.",
        "owner_id": owner,
        "created_at": "2025-01-02T03:04:05.678Z",
    });

    let recipe: Recipe = serde_json::from_value(json).unwrap();
    assert_eq!(recipe.owner_id, owner);
    assert!(recipe.image.is_none());
    assert!(recipe.updated_at.is_none());
}

#[test]
fn test_recipe_fields_reject_overlong_ingredient() {
    let rules = ValidationRules {
        max_ingredient_length: 5,
        ..ValidationRules::default()
    };
    let mut long = fields("Bread");
    long.ingredients = vec!["salt".to_string(), "buttermilk".to_string()];

    let err = long.normalized(&rules).unwrap_err();

    assert!(matches!(err, CoreError::InvalidInput { .. }));
    assert_eq!(err.field(), Some("ingredients"));
    assert!(fields("Bread").normalized(&rules).is_ok());
}
