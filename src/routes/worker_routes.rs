use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

use crate::dto::worker_dto::{CreateWorkerRequest, CreateWorkerResponse};
use crate::models::Worker;
use crate::services::WorkerService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_worker_router() -> Router<AppState> {
    Router::new().route("/", get(list_workers).post(create_worker))
}

async fn list_workers(State(state): State<AppState>) -> Result<Json<Vec<Worker>>, AppError> {
    let service = WorkerService::new(state.pool.clone());
    let workers = service.list_workers().await?;
    Ok(Json(workers))
}

async fn create_worker(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkerRequest>, JsonRejection>,
) -> Result<Json<CreateWorkerResponse>, AppError> {
    let Json(request) = payload?;
    let service = WorkerService::new(state.pool.clone());
    let response = service.create_worker(request).await?;
    Ok(Json(response))
}
