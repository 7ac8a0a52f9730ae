//! Validates and submits recipe mutations.

use crate::{
    Confirmation, CoreError, Recipe, RecipeDraft, RecipeListController, RecipeStore,
    Result as CoreErrorResult, SessionManager, ValidationRules,
};

use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;

pub const DELETE_PROMPT: &str = "Delete this recipe? This cannot be undone.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; nothing was sent to the store.
    Cancelled,
}

pub struct RecipeFormController {
    store: Arc<dyn RecipeStore>,
    rules: ValidationRules,
}

impl RecipeFormController {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self::with_rules(store, ValidationRules::default())
    }

    pub fn with_rules(store: Arc<dyn RecipeStore>, rules: ValidationRules) -> Self {
        Self { store, rules }
    }

    /// Create a recipe, or update `editing_id` when given.
    ///
    /// On success the list is refreshed. A refresh failure after a successful
    /// write is logged, not returned.
    pub async fn submit(
        &self,
        session: &SessionManager,
        list: &mut RecipeListController,
        draft: RecipeDraft,
        editing_id: Option<Uuid>,
    ) -> CoreErrorResult<Recipe> {
        let identity = session
            .current_identity()
            .await
            .ok_or_else(CoreError::unauthenticated)?;

        let fields = draft.into_fields(&self.rules)?;

        let result = match editing_id {
            None => self.store.create(identity.id, fields).await,
            Some(id) => {
                if let Some(cached) = list.find(id) {
                    cached.ensure_owner(identity.id)?;
                }
                self.store.update(id, identity.id, fields).await
            }
        };

        let recipe = self.after_write(session, list, result).await?;
        info!("Saved recipe {} ({})", recipe.id, recipe.title);
        Ok(recipe)
    }

    /// Delete after the user confirms. Declining never reaches the store.
    pub async fn delete(
        &self,
        session: &SessionManager,
        list: &mut RecipeListController,
        id: Uuid,
        confirmation: &dyn Confirmation,
    ) -> CoreErrorResult<DeleteOutcome> {
        let identity = session
            .current_identity()
            .await
            .ok_or_else(CoreError::unauthenticated)?;

        if !confirmation.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Some(cached) = list.find(id) {
            cached.ensure_owner(identity.id)?;
        }

        let result = self.store.delete(id, identity.id).await;
        self.after_write(session, list, result).await?;
        info!("Deleted recipe {id}");
        Ok(DeleteOutcome::Deleted)
    }

    async fn after_write<T>(
        &self,
        session: &SessionManager,
        list: &mut RecipeListController,
        result: CoreErrorResult<T>,
    ) -> CoreErrorResult<T> {
        match result {
            Ok(value) => {
                if let Err(e) = list.refresh(session).await {
                    warn!("Saved, but the list could not be refreshed: {e}");
                }
                Ok(value)
            }
            Err(e @ CoreError::NotFound { .. }) => {
                // Someone else removed it; show the current state
                if let Err(refresh_err) = list.refresh(session).await {
                    warn!("List refresh after missing recipe failed: {refresh_err}");
                }
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
