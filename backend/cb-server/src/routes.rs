use crate::{
    AppState, create_recipe, delete_recipe, get_recipe, health, list_recipes, login, me,
    register, update_recipe,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// `max_body_bytes` replaces axum's 2 MiB default so that a recipe inside the
/// configured field limits always fits.
pub fn build_router(state: AppState, max_connections: usize, max_body_bytes: usize) -> Router {
    Router::new()
        // Accounts
        .route("/api/v1/register", post(register))
        .route("/api/v1/login", post(login))
        .route("/api/v1/me", get(me))
        // Recipes
        .route("/api/v1/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/api/v1/recipes/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(ConcurrencyLimitLayer::new(max_connections))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
