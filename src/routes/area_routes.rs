use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::area_dto::AreasQuery;
use crate::models::Area;
use crate::services::AreaService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_area_router() -> Router<AppState> {
    Router::new().route("/", get(list_areas))
}

async fn list_areas(
    State(state): State<AppState>,
    query: Result<Query<AreasQuery>, QueryRejection>,
) -> Result<Json<Vec<Area>>, AppError> {
    let Query(query) = query?;
    let service = AreaService::new(state.pool.clone());
    let areas = service.list_areas(query.tipo.as_deref()).await?;
    Ok(Json(areas))
}
