//! Account REST API handlers

use crate::{
    ApiResult, AppState, AuthResponse, CurrentUser, LoginRequest, MeResponse, RegisterRequest,
};

use cb_core::validation::{normalize_display_name, require_password};

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

/// POST /api/v1/register
///
/// Create an account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = payload?;

    let display_name = normalize_display_name(&req.display_name);
    let session = state
        .credentials
        .register(&req.email, &req.password, &display_name)
        .await?;

    info!("Registered account {}", session.identity.id);
    Ok(Json(session.into()))
}

/// POST /api/v1/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = payload?;
    require_password(&req.password)?;

    let session = state
        .credentials
        .authenticate(&req.email, &req.password)
        .await?;

    Ok(Json(session.into()))
}

/// GET /api/v1/me
pub async fn me(CurrentUser(identity): CurrentUser) -> ApiResult<Json<MeResponse>> {
    Ok(Json(MeResponse {
        user: identity.into(),
    }))
}
