use crate::{Identity, Recipe};

use serde::Serialize;

const PREVIEW_INGREDIENTS: usize = 3;

/// A recipe tagged with the viewer's capabilities.
///
/// There is no finer-grained permission model: `can_edit` and `can_delete`
/// always equal `is_owner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderableRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub is_owner: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl RenderableRecipe {
    pub fn new(recipe: Recipe, viewer: Option<&Identity>) -> Self {
        let is_owner = viewer.is_some_and(|identity| recipe.is_owned_by(identity.id));
        Self {
            recipe,
            is_owner,
            can_edit: is_owner,
            can_delete: is_owner,
        }
    }

    /// First few ingredients for a list card.
    pub fn ingredients_preview(&self) -> String {
        self.recipe
            .ingredients
            .iter()
            .take(PREVIEW_INGREDIENTS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
