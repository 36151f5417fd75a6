use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::services::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let Json(request) = payload?;
    let service = AuthService::new(state.pool.clone(), state.jwt.clone());
    let response = service.register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(request) = payload?;
    let service = AuthService::new(state.pool.clone(), state.jwt.clone());
    let response = service.login(request).await?;
    Ok(Json(response))
}
