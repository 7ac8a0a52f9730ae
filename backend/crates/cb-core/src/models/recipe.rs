//! Recipe entity - the only record users create and share.

use crate::{CoreError, RecipeFields, Result as CoreErrorResult};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    /// Ordered, each entry non-empty
    pub ingredients: Vec<String>,
    pub steps: String,
    /// URI or data URI
    #[serde(default)]
    pub image: Option<String>,
    /// Immutable after creation
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Create a new recipe owned by `owner_id`.
    ///
    /// `fields` are expected to be normalized already.
    pub fn new(owner_id: Uuid, fields: RecipeFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            ingredients: fields.ingredients,
            steps: fields.steps,
            image: fields.image,
            owner_id,
            created_at: now_millis(),
            updated_at: None,
        }
    }

    pub fn is_owned_by(&self, identity_id: Uuid) -> bool {
        self.owner_id == identity_id
    }

    /// Fail with `Forbidden` unless `requester_id` owns this recipe.
    #[track_caller]
    pub fn ensure_owner(&self, requester_id: Uuid) -> CoreErrorResult<()> {
        if self.is_owned_by(requester_id) {
            Ok(())
        } else {
            Err(CoreError::forbidden(format!(
                "Recipe {} is not owned by {}",
                self.id, requester_id
            )))
        }
    }

    /// Replace the mutable fields. `owner_id` and `created_at` never change.
    pub fn apply(&mut self, fields: RecipeFields) {
        self.title = fields.title;
        self.ingredients = fields.ingredients;
        self.steps = fields.steps;
        self.image = fields.image;
        self.updated_at = Some(now_millis());
    }

    pub fn fields(&self) -> RecipeFields {
        RecipeFields {
            title: self.title.clone(),
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
            image: self.image.clone(),
        }
    }
}

/// Stores persist millisecond timestamps; truncating here keeps values stable
/// across a write and read-back.
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
