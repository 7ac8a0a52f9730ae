use crate::RenderableRecipe;

use serde::Serialize;

/// Render model produced by the list controller.
///
/// An empty filter result is its own state so the view can show a
/// placeholder instead of an empty grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "recipes", rename_all = "snake_case")]
pub enum ListView {
    Empty,
    Recipes(Vec<RenderableRecipe>),
}

impl ListView {
    pub fn from_items(items: Vec<RenderableRecipe>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Recipes(items)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn recipes(&self) -> &[RenderableRecipe] {
        match self {
            Self::Empty => &[],
            Self::Recipes(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.recipes().len()
    }
}
