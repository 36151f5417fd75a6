use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::dto::report_dto::{
    CreateReportRequest, CreateReportResponse, ListReportsQuery, PaginatedResponse,
};
use crate::middleware::auth::{auth_middleware, require_role, AuthenticatedUser, RequiredRoles};
use crate::models::Report;
use crate::services::ReportService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// GET /reportes/:id es público; alta y listado exigen token
pub fn create_report_router(state: &AppState) -> Router<AppState> {
    let mut create = post(create_report);
    if !state.config.reportes_write_roles.is_empty() {
        let required = RequiredRoles::new(state.config.reportes_write_roles.iter().cloned());
        create = create.route_layer(from_fn_with_state(required, require_role));
    }

    let protected = Router::new()
        .route("/", get(list_reports).merge(create))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/:id", get(get_report))
        .merge(protected)
}

async fn create_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<CreateReportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateReportResponse>), AppError> {
    let Json(request) = payload?;
    let service = ReportService::new(state.pool.clone());
    let response = service.create_report(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_reports(
    State(state): State<AppState>,
    query: Result<Query<ListReportsQuery>, QueryRejection>,
) -> Result<Json<PaginatedResponse<Report>>, AppError> {
    let Query(query) = query?;
    let service = ReportService::new(state.pool.clone());
    let response = service.list_reports(query).await?;
    Ok(Json(response))
}

async fn get_report(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Report>, AppError> {
    let Path(id) = id?;
    let service = ReportService::new(state.pool.clone());
    let report = service.get_report(id).await?;
    Ok(Json(report))
}
