//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: &'static str,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Hash(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Una violación de unicidad en la base se reporta como conflicto; el resto sigue como error interno
    pub fn from_unique_violation(e: sqlx::Error, message: &str) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(message.to_string())
            }
            _ => AppError::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "Error de base de datos");
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "Error interno del servidor".to_string(),
                    details: None,
                    code: "INTERNAL_ERROR",
                }
            }

            AppError::Validation(e) => {
                tracing::warn!(error = %e, "Validación fallida");
                let field_errors = e.field_errors();
                let mut campos: Vec<&str> = field_errors.keys().copied().collect();
                campos.sort_unstable();
                let mensajes: Vec<String> = campos
                    .iter()
                    .filter_map(|campo| field_errors.get(campo))
                    .filter_map(|errs| errs.first().and_then(|err| err.message.as_ref()))
                    .map(|m| m.to_string())
                    .collect();
                let message = if mensajes.is_empty() {
                    format!("Campos inválidos o faltantes: {}", campos.join(", "))
                } else {
                    mensajes.join("; ")
                };
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message,
                    details: Some(json!({ "fields": campos })),
                    code: "VALIDATION_ERROR",
                }
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Solicitud inválida: {}", msg);
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    details: None,
                    code: "BAD_REQUEST",
                }
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflicto: {}", msg);
                ErrorResponse {
                    error: "Conflict".to_string(),
                    message: msg,
                    details: None,
                    code: "CONFLICT",
                }
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("Acceso no autorizado: {}", msg);
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    message: msg,
                    details: None,
                    code: "UNAUTHORIZED",
                }
            }

            AppError::Forbidden(msg) => {
                tracing::warn!("Acceso prohibido: {}", msg);
                ErrorResponse {
                    error: "Forbidden".to_string(),
                    message: msg,
                    details: None,
                    code: "FORBIDDEN",
                }
            }

            AppError::NotFound(msg) => {
                tracing::debug!("Recurso no encontrado: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: "NOT_FOUND",
                }
            }

            AppError::Hash(msg) => {
                tracing::error!("Error de hash: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "Error procesando credenciales".to_string(),
                    details: None,
                    code: "INTERNAL_ERROR",
                }
            }

            AppError::Internal(msg) => {
                tracing::error!("Error interno: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "Error interno del servidor".to_string(),
                    details: None,
                    code: "INTERNAL_ERROR",
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("JSON inválido: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Parámetros inválidos: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("Ruta inválida: {}", rejection.body_text()))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación sobre un campo concreto
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.message = Some(message.into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
