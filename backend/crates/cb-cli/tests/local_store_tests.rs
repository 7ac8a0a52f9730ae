use cb_cli::LocalStore;
use cb_core::{CredentialStore, ListOrder, RecipeFields, RecipeStore};

use googletest::assert_that;
use googletest::prelude::{eq, len};
use tempfile::TempDir;
use uuid::Uuid;

const PASSWORD: &str = "secret-password";

fn store(temp: &TempDir) -> LocalStore {
    LocalStore::new(temp.path().join("local_store.json"))
}

fn fields(title: &str) -> RecipeFields {
    RecipeFields {
        title: title.to_string(),
        ingredients: vec!["flour".to_string(), "water".to_string()],
        steps: "Mix.".to_string(),
        image: None,
    }
}

#[tokio::test]
async fn given_registered_user_when_reopened_then_data_persists() {
    // Given
    let temp = TempDir::new().unwrap();
    let session = store(&temp)
        .register("Ada@Example.com", PASSWORD, "Ada")
        .await
        .unwrap();
    store(&temp)
        .create(session.identity.id, fields("Bread"))
        .await
        .unwrap();

    // When
    let reopened = store(&temp);
    let identity = reopened.resolve(&session.token).await.unwrap();
    let recipes = reopened.list_all(ListOrder::Store).await.unwrap();

    // Then
    assert_that!(identity.email, eq("ada@example.com"));
    assert_that!(recipes, len(eq(1)));
    assert_that!(recipes[0].owner_id, eq(session.identity.id));
}

#[tokio::test]
async fn given_existing_email_when_register_then_duplicate_account() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store(&temp);
    store.register("ada@example.com", PASSWORD, "Ada").await.unwrap();

    // When
    let result = store.register(" ADA@example.com", PASSWORD, "Other").await;

    // Then
    assert_that!(result.unwrap_err().code(), eq("DUPLICATE_ACCOUNT"));
}

#[tokio::test]
async fn given_wrong_password_when_authenticate_then_invalid_credentials() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store(&temp);
    store.register("ada@example.com", PASSWORD, "Ada").await.unwrap();

    // When
    let result = store.authenticate("ada@example.com", "wrong-password").await;

    // Then
    assert_that!(result.unwrap_err().code(), eq("INVALID_CREDENTIALS"));
}

#[tokio::test]
async fn given_unknown_token_when_resolve_then_invalid_token() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store(&temp);

    // When
    let garbage = store.resolve("not-an-id").await;
    let unknown = store.resolve(&Uuid::new_v4().to_string()).await;

    // Then
    assert_that!(garbage.unwrap_err().code(), eq("INVALID_TOKEN"));
    assert_that!(unknown.unwrap_err().code(), eq("INVALID_TOKEN"));
}

#[tokio::test]
async fn given_other_owner_when_update_or_delete_then_forbidden_and_unchanged() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store(&temp);
    let owner = Uuid::new_v4();
    let recipe = store.create(owner, fields("Bread")).await.unwrap();
    let intruder = Uuid::new_v4();

    // When
    let update = store.update(recipe.id, intruder, fields("Stolen")).await;
    let delete = store.delete(recipe.id, intruder).await;

    // Then
    assert_that!(update.unwrap_err().code(), eq("FORBIDDEN"));
    assert_that!(delete.unwrap_err().code(), eq("FORBIDDEN"));
    let current = store.get(recipe.id).await.unwrap();
    assert_that!(current, eq(&recipe));
}

#[tokio::test]
async fn given_owner_when_update_then_fields_replaced_and_owner_kept() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store(&temp);
    let owner = Uuid::new_v4();
    let recipe = store.create(owner, fields("Bread")).await.unwrap();

    // When
    let updated = store
        .update(recipe.id, owner, fields("Sourdough"))
        .await
        .unwrap();

    // Then
    assert_that!(updated.title, eq("Sourdough"));
    assert_that!(updated.owner_id, eq(owner));
    assert_that!(updated.created_at, eq(recipe.created_at));
    assert_that!(updated.updated_at.is_some(), eq(true));
}

#[tokio::test]
async fn given_blank_title_when_create_then_invalid_input_and_nothing_written() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store(&temp);

    // When
    let result = store.create(Uuid::new_v4(), fields("   ")).await;

    // Then
    assert_that!(result.unwrap_err().field(), googletest::prelude::some(eq("title")));
    assert_that!(store.list_all(ListOrder::Store).await.unwrap(), len(eq(0)));
}

#[tokio::test]
async fn given_missing_recipe_when_delete_then_not_found() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store(&temp);

    // When
    let result = store.delete(Uuid::new_v4(), Uuid::new_v4()).await;

    // Then
    assert_that!(result.unwrap_err().code(), eq("NOT_FOUND"));
}

#[tokio::test]
async fn given_corrupt_file_when_list_then_store_unavailable() {
    // Given
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("local_store.json"), "{ not json").unwrap();

    // When
    let result = store(&temp).list_all(ListOrder::Store).await;

    // Then
    assert_that!(result.unwrap_err().code(), eq("STORE_UNAVAILABLE"));
}

#[tokio::test]
async fn given_other_owner_and_blank_title_when_update_then_forbidden() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store(&temp);
    let recipe = store.create(Uuid::new_v4(), fields("Bread")).await.unwrap();

    // When
    let update = store.update(recipe.id, Uuid::new_v4(), fields("   ")).await;

    // Then
    assert_that!(update.unwrap_err().code(), eq("FORBIDDEN"));
}

#[tokio::test]
async fn given_owner_and_blank_title_when_update_then_invalid_input_and_unchanged() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = store(&temp);
    let owner = Uuid::new_v4();
    let recipe = store.create(owner, fields("Bread")).await.unwrap();

    // When
    let update = store.update(recipe.id, owner, fields("")).await;

    // Then
    assert_that!(update.unwrap_err().code(), eq("VALIDATION_ERROR"));
    assert_that!(store.get(recipe.id).await.unwrap(), eq(&recipe));
}
