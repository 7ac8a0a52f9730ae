use crate::{OwnedMutation, RecipeRepository};

use cb_core::{
    CoreError, ListOrder, Recipe, RecipeFields, RecipeStore, Result as CoreErrorResult,
    ValidationRules,
};

use log::{debug, info};
use sqlx::SqlitePool;
use uuid::Uuid;

/// [`RecipeStore`] backed by the `recipes` table.
pub struct SqliteRecipeStore {
    recipes: RecipeRepository,
    rules: ValidationRules,
}

impl SqliteRecipeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_rules(pool, ValidationRules::default())
    }

    pub fn with_rules(pool: SqlitePool, rules: ValidationRules) -> Self {
        Self {
            recipes: RecipeRepository::new(pool),
            rules,
        }
    }
}

#[async_trait::async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn list_all(&self, order: ListOrder) -> CoreErrorResult<Vec<Recipe>> {
        let recipes = self.recipes.list_all(order).await?;
        debug!("Listed {} recipes ({})", recipes.len(), order);
        Ok(recipes)
    }

    async fn get(&self, id: Uuid) -> CoreErrorResult<Recipe> {
        self.recipes
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("Recipe {id} not found")))
    }

    async fn create(&self, owner_id: Uuid, fields: RecipeFields) -> CoreErrorResult<Recipe> {
        let fields = fields.normalized(&self.rules)?;
        let recipe = Recipe::new(owner_id, fields);

        self.recipes.create(&recipe).await?;
        info!("Created recipe {} for {}", recipe.id, owner_id);

        Ok(recipe)
    }

    async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        fields: RecipeFields,
    ) -> CoreErrorResult<Recipe> {
        let fields = match fields.normalized(&self.rules) {
            Ok(fields) => fields,
            Err(invalid) => {
                // Missing and foreign rows report that before the input problem
                owned(id, requester_id, self.recipes.check_owner(id, requester_id).await?)?;
                return Err(invalid);
            }
        };

        let recipe = owned(
            id,
            requester_id,
            self.recipes.update_owned(id, requester_id, fields).await?,
        )?;
        info!("Updated recipe {}", id);
        Ok(recipe)
    }

    async fn delete(&self, id: Uuid, requester_id: Uuid) -> CoreErrorResult<()> {
        owned(id, requester_id, self.recipes.delete_owned(id, requester_id).await?)?;
        info!("Deleted recipe {}", id);
        Ok(())
    }
}

#[track_caller]
fn owned<T>(id: Uuid, requester_id: Uuid, outcome: OwnedMutation<T>) -> CoreErrorResult<T> {
    match outcome {
        OwnedMutation::Applied(value) => Ok(value),
        OwnedMutation::Missing => Err(CoreError::not_found(format!("Recipe {id} not found"))),
        OwnedMutation::NotOwner => Err(CoreError::forbidden(format!(
            "Recipe {id} is not owned by {requester_id}"
        ))),
    }
}
