//! Recipe REST API handlers
//!
//! Reads are public. Writes need a bearer token and the store rejects
//! changes to recipes the caller does not own.

use crate::{
    ApiResult, AppState, CurrentUser, DeleteResponse, ListRecipesQuery, RecipeDto,
    RecipeListResponse, RecipeRequest, RecipeResponse,
};

use cb_core::ListOrder;

use std::str::FromStr;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
};
use log::info;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/recipes?order=newest
pub async fn list_recipes(
    State(state): State<AppState>,
    query: Result<Query<ListRecipesQuery>, QueryRejection>,
) -> ApiResult<Json<RecipeListResponse>> {
    let Query(query) = query?;
    let order = match query.order {
        Some(ref order) => ListOrder::from_str(order)?,
        None => ListOrder::default(),
    };

    let recipes = state.recipes.list_all(order).await?;

    Ok(Json(RecipeListResponse {
        recipes: recipes.into_iter().map(RecipeDto::from).collect(),
    }))
}

/// GET /api/v1/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RecipeResponse>> {
    let recipe_id = Uuid::parse_str(&id)?;
    let recipe = state.recipes.get(recipe_id).await?;

    Ok(Json(RecipeResponse {
        recipe: recipe.into(),
    }))
}

/// POST /api/v1/recipes
///
/// The caller becomes the owner.
pub async fn create_recipe(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> ApiResult<Json<RecipeResponse>> {
    let Json(req) = payload?;

    let recipe = state.recipes.create(identity.id, req.into()).await?;
    info!("Recipe {} created by {}", recipe.id, identity.id);

    Ok(Json(RecipeResponse {
        recipe: recipe.into(),
    }))
}

/// PUT /api/v1/recipes/{id}
pub async fn update_recipe(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> ApiResult<Json<RecipeResponse>> {
    let recipe_id = Uuid::parse_str(&id)?;
    let Json(req) = payload?;

    let recipe = state
        .recipes
        .update(recipe_id, identity.id, req.into())
        .await?;
    info!("Recipe {} updated by {}", recipe.id, identity.id);

    Ok(Json(RecipeResponse {
        recipe: recipe.into(),
    }))
}

/// DELETE /api/v1/recipes/{id}
pub async fn delete_recipe(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let recipe_id = Uuid::parse_str(&id)?;

    state.recipes.delete(recipe_id, identity.id).await?;
    info!("Recipe {} deleted by {}", recipe_id, identity.id);

    Ok(Json(DeleteResponse {
        deleted_id: recipe_id.to_string(),
    }))
}
