//! Rutas HTTP
//!
//! Arma el router completo de la API sobre `AppState`.

pub mod area_routes;
pub mod auth_routes;
pub mod report_routes;
pub mod worker_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/auth", auth_routes::create_auth_router())
        .nest("/areas", area_routes::create_area_router())
        .nest("/trabajadores", worker_routes::create_worker_router())
        .nest("/reportes", report_routes::create_report_router(&state))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

/// Endpoint simple para ver que el backend está vivo
async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "message": "TRABUNDA backend online",
    }))
}
