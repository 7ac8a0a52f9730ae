use crate::{ListOrder, Recipe, RecipeFields, Result as CoreErrorResult};

use uuid::Uuid;

/// Persists recipes keyed by id, each tagged with its owner.
///
/// Every implementation validates `fields` and enforces ownership itself;
/// callers may check first but the store has the final word.
#[async_trait::async_trait]
pub trait RecipeStore: Send + Sync {
    async fn list_all(&self, order: ListOrder) -> CoreErrorResult<Vec<Recipe>>;

    async fn get(&self, id: Uuid) -> CoreErrorResult<Recipe>;

    async fn create(&self, owner_id: Uuid, fields: RecipeFields) -> CoreErrorResult<Recipe>;

    /// `NotFound` if missing, `Forbidden` if `requester_id` is not the owner.
    /// A failed update leaves the record untouched.
    async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        fields: RecipeFields,
    ) -> CoreErrorResult<Recipe>;

    /// `NotFound` if missing, `Forbidden` if `requester_id` is not the owner.
    async fn delete(&self, id: Uuid, requester_id: Uuid) -> CoreErrorResult<()>;
}
