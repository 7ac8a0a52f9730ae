use crate::{Identity, Recipe, RecipeFields, RenderableRecipe};

fn recipe_for(owner: &Identity, ingredients: &[&str]) -> Recipe {
    Recipe::new(
        owner.id,
        RecipeFields {
            title: "Stew".to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            steps: String::new(),
            image: None,
        },
    )
}

fn identity(name: &str) -> Identity {
    Identity::new(format!("{name}@example.com"), name.to_string())
}

#[test]
fn test_owner_can_edit_and_delete() {
    let alice = identity("alice");
    let view = RenderableRecipe::new(recipe_for(&alice, &[]), Some(&alice));

    assert!(view.is_owner);
    assert!(view.can_edit);
    assert!(view.can_delete);
}

#[test]
fn test_other_viewer_cannot_edit() {
    let alice = identity("alice");
    let bob = identity("bob");
    let view = RenderableRecipe::new(recipe_for(&alice, &[]), Some(&bob));

    assert!(!view.is_owner);
    assert!(!view.can_edit);
    assert!(!view.can_delete);
}

#[test]
fn test_anonymous_viewer_cannot_edit() {
    let alice = identity("alice");
    let view = RenderableRecipe::new(recipe_for(&alice, &[]), None);

    assert!(!view.is_owner);
    assert_eq!(view.can_edit, view.is_owner);
    assert_eq!(view.can_delete, view.is_owner);
}

#[test]
fn test_ingredients_preview_takes_first_three() {
    let alice = identity("alice");
    let view = RenderableRecipe::new(
        recipe_for(&alice, &["beef", "carrot", "onion", "stock"]),
        None,
    );

    assert_eq!(view.ingredients_preview(), "beef, carrot, onion");
}

#[test]
fn test_renderable_serializes_flat() {
    let alice = identity("alice");
    let view = RenderableRecipe::new(recipe_for(&alice, &["beef"]), Some(&alice));

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["title"], "Stew");
    assert_eq!(json["is_owner"], true);
    assert_eq!(json["owner_id"], alice.id.to_string());
}
