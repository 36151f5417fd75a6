//! Servicio de trabajadores

use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::{
    dto::worker_dto::{CreateWorkerRequest, CreateWorkerResponse},
    models::{NewWorker, Worker},
    repositories::WorkerRepository,
    utils::errors::{validation_error, AppError, AppResult},
};

pub struct WorkerService {
    workers: WorkerRepository,
}

impl WorkerService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            workers: WorkerRepository::new(pool),
        }
    }

    pub async fn list_workers(&self) -> AppResult<Vec<Worker>> {
        self.workers.list_all().await
    }

    pub async fn create_worker(&self, request: CreateWorkerRequest) -> AppResult<CreateWorkerResponse> {
        let worker = new_worker_from_request(request)?;

        if self.workers.codigo_exists(&worker.codigo).await? {
            return Err(AppError::Conflict("El código ya existe".to_string()));
        }

        let trabajador_id = self.workers.create(&worker).await?;
        info!(trabajador_id, codigo = %worker.codigo, "Trabajador registrado");

        Ok(CreateWorkerResponse {
            message: "Trabajador registrado correctamente".to_string(),
            trabajador_id,
        })
    }
}

/// Valida campos obligatorios antes de tocar la base
pub fn new_worker_from_request(request: CreateWorkerRequest) -> AppResult<NewWorker> {
    request.validate()?;

    let codigo = request.codigo.unwrap_or_default().trim().to_string();
    let nombre_completo = request.nombre_completo.unwrap_or_default().trim().to_string();
    if codigo.is_empty() {
        return Err(validation_error("codigo", "Falta el campo codigo"));
    }
    if nombre_completo.is_empty() {
        return Err(validation_error("nombre_completo", "Falta el campo nombreCompleto"));
    }

    Ok(NewWorker {
        codigo,
        nombre_completo,
        dni: non_empty(request.dni),
        sexo: non_empty(request.sexo),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreateWorkerRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_worker() {
        let worker = new_worker_from_request(request(json!({
            "codigo": " T-001 ",
            "nombreCompleto": "Luis Quispe",
            "dni": "12345678",
            "sexo": ""
        })))
        .unwrap();
        assert_eq!(worker.codigo, "T-001");
        assert_eq!(worker.nombre_completo, "Luis Quispe");
        assert_eq!(worker.dni.as_deref(), Some("12345678"));
        assert_eq!(worker.sexo, None);
    }

    #[test]
    fn test_snake_case_alias_is_accepted() {
        let worker = new_worker_from_request(request(json!({
            "codigo": "T-002",
            "nombre_completo": "Rosa Mamani"
        })))
        .unwrap();
        assert_eq!(worker.nombre_completo, "Rosa Mamani");
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        assert!(new_worker_from_request(request(json!({ "nombreCompleto": "X" }))).is_err());
        assert!(new_worker_from_request(request(json!({ "codigo": "T-3" }))).is_err());
        assert!(new_worker_from_request(request(json!({ "codigo": "  ", "nombreCompleto": "X" }))).is_err());
    }
}
