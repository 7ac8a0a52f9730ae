//! In-process recipe store.
//!
//! Applies the same validation and ownership rules as the persistent stores.
//! The availability switch and call counter exist so callers can observe
//! whether a controller reached the store at all.

use crate::{
    CoreError, ListOrder, Recipe, RecipeFields, RecipeStore, Result as CoreErrorResult,
    ValidationRules,
};

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use uuid::Uuid;

#[derive(Debug)]
pub struct MemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
    rules: ValidationRules,
    available: AtomicBool,
    calls: AtomicUsize,
}

impl Default for MemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::with_rules(ValidationRules::default())
    }

    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            recipes: RwLock::new(Vec::new()),
            rules,
            available: AtomicBool::new(true),
            calls: AtomicUsize::new(0),
        }
    }

    /// Seed with existing records, kept in the given order.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let store = Self::new();
        if let Ok(mut guard) = store.recipes.write() {
            *guard = recipes;
        }
        store
    }

    /// While unavailable every operation fails with `StoreUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of trait operations attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    #[track_caller]
    fn enter(&self) -> CoreErrorResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CoreError::store_unavailable("Memory store switched off"))
        }
    }
}

#[async_trait::async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn list_all(&self, order: ListOrder) -> CoreErrorResult<Vec<Recipe>> {
        self.enter()?;
        let guard = self
            .recipes
            .read()
            .map_err(|e| CoreError::store_unavailable(format!("Lock poisoned: {e}")))?;

        let mut recipes = guard.clone();
        if order == ListOrder::NewestFirst {
            // Stable sort keeps insertion order for equal timestamps
            recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Ok(recipes)
    }

    async fn get(&self, id: Uuid) -> CoreErrorResult<Recipe> {
        self.enter()?;
        let guard = self
            .recipes
            .read()
            .map_err(|e| CoreError::store_unavailable(format!("Lock poisoned: {e}")))?;

        guard
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(format!("Recipe {id} not found")))
    }

    async fn create(&self, owner_id: Uuid, fields: RecipeFields) -> CoreErrorResult<Recipe> {
        self.enter()?;
        let fields = fields.normalized(&self.rules)?;
        let recipe = Recipe::new(owner_id, fields);

        let mut guard = self
            .recipes
            .write()
            .map_err(|e| CoreError::store_unavailable(format!("Lock poisoned: {e}")))?;
        guard.push(recipe.clone());
        Ok(recipe)
    }

    async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        fields: RecipeFields,
    ) -> CoreErrorResult<Recipe> {
        self.enter()?;
        let mut guard = self
            .recipes
            .write()
            .map_err(|e| CoreError::store_unavailable(format!("Lock poisoned: {e}")))?;

        let recipe = guard
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found(format!("Recipe {id} not found")))?;
        recipe.ensure_owner(requester_id)?;

        let fields = fields.normalized(&self.rules)?;
        recipe.apply(fields);
        Ok(recipe.clone())
    }

    async fn delete(&self, id: Uuid, requester_id: Uuid) -> CoreErrorResult<()> {
        self.enter()?;
        let mut guard = self
            .recipes
            .write()
            .map_err(|e| CoreError::store_unavailable(format!("Lock poisoned: {e}")))?;

        let index = guard
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found(format!("Recipe {id} not found")))?;
        guard[index].ensure_owner(requester_id)?;
        guard.remove(index);
        Ok(())
    }
}
