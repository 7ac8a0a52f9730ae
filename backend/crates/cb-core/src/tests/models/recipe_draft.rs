use crate::{CoreError, Recipe, RecipeDraft, RecipeFields, ValidationRules};

use uuid::Uuid;

#[test]
fn test_draft_into_fields_trims_and_splits() {
    let draft = RecipeDraft {
        title: "  Pancakes ".to_string(),
        ingredients: " eggs \n\n  milk\r\nflour\n   \neggs".to_string(),
        steps: "\n Whisk and fry. \n".to_string(),
        image: Some("   ".to_string()),
    };

    let fields = draft.into_fields(&ValidationRules::default()).unwrap();

    assert_eq!(fields.title, "Pancakes");
    assert_eq!(fields.ingredients, vec!["eggs", "milk", "flour", "eggs"]);
    assert_eq!(fields.steps, "Whisk and fry.");
    assert_eq!(fields.image, None);
}

#[test]
fn test_draft_blank_title_is_rejected() {
    let draft = RecipeDraft {
        title: "   ".to_string(),
        ..RecipeDraft::default()
    };

    let err = draft.into_fields(&ValidationRules::default()).unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput { .. }));
    assert_eq!(err.field(), Some("title"));
}

#[test]
fn test_draft_title_limit() {
    let rules = ValidationRules {
        max_title_length: 5,
        ..ValidationRules::default()
    };
    let draft = RecipeDraft {
        title: "Lasagne".to_string(),
        ..RecipeDraft::default()
    };

    let err = draft.into_fields(&rules).unwrap_err();
    assert_eq!(err.field(), Some("title"));
}

#[test]
fn test_draft_ingredient_limit() {
    let rules = ValidationRules {
        max_ingredients: 2,
        ..ValidationRules::default()
    };
    let draft = RecipeDraft {
        title: "Salad".to_string(),
        ingredients: "a\nb\nc".to_string(),
        ..RecipeDraft::default()
    };

    let err = draft.into_fields(&rules).unwrap_err();
    assert_eq!(err.field(), Some("ingredients"));
}

#[test]
fn test_draft_from_recipe_prefills_one_ingredient_per_line() {
    let recipe = Recipe::new(
        Uuid::new_v4(),
        RecipeFields {
            title: "Tea".to_string(),
            ingredients: vec!["water".to_string(), "tea leaves".to_string()],
            steps: "Steep.".to_string(),
            image: Some("https://example.com/tea.png".to_string()),
        },
    );

    let draft = RecipeDraft::from_recipe(&recipe);

    assert_eq!(draft.title, "Tea");
    assert_eq!(draft.ingredients, "water\ntea leaves");
    assert_eq!(draft.image.as_deref(), Some("https://example.com/tea.png"));

    let fields = draft.into_fields(&ValidationRules::default()).unwrap();
    assert_eq!(fields, recipe.fields());
}
