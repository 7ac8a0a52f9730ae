//! Fetches the full collection and turns it into something a view can render.

use crate::filter;
use crate::{
    Identity, ListOrder, ListView, Recipe, RecipeStore, RenderableRecipe,
    Result as CoreErrorResult, SessionManager,
};

use std::sync::Arc;

use log::warn;
use uuid::Uuid;

pub struct RecipeListController {
    store: Arc<dyn RecipeStore>,
    order: ListOrder,
    recipes: Vec<Recipe>,
    viewer: Option<Identity>,
}

impl RecipeListController {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self {
            store,
            order: ListOrder::default(),
            recipes: Vec::new(),
            viewer: None,
        }
    }

    pub fn with_order(mut self, order: ListOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> ListOrder {
        self.order
    }

    /// Replace the collection with a fresh fetch and re-resolve the viewer.
    ///
    /// On failure the collection is emptied and the error returned.
    pub async fn refresh(&mut self, session: &SessionManager) -> CoreErrorResult<()> {
        self.viewer = session.current_identity().await;

        match self.store.list_all(self.order).await {
            Ok(recipes) => {
                self.recipes = recipes;
                Ok(())
            }
            Err(e) => {
                warn!("Recipe list refresh failed: {e}");
                self.recipes.clear();
                Err(e)
            }
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn viewer(&self) -> Option<&Identity> {
        self.viewer.as_ref()
    }

    pub fn find(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Every fetched recipe tagged for the current viewer, in store order.
    pub fn renderables(&self) -> impl Iterator<Item = RenderableRecipe> + '_ {
        self.recipes
            .iter()
            .map(|r| RenderableRecipe::new(r.clone(), self.viewer.as_ref()))
    }

    /// Filter the last fetched collection. Never hits the store.
    pub fn apply_filter(&self, query: &str) -> ListView {
        let viewer = self.viewer.as_ref();
        ListView::from_items(
            filter::apply_filter(query, &self.recipes)
                .map(|r| RenderableRecipe::new(r.clone(), viewer))
                .collect(),
        )
    }
}
