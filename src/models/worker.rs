//! Modelo de Trabajador

use serde::Serialize;
use sqlx::FromRow;

/// Se serializa con los nombres de columna de la tabla
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Worker {
    pub id: i64,
    pub codigo: String,
    pub nombre_completo: String,
    pub dni: Option<String>,
    pub sexo: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone)]
pub struct NewWorker {
    pub codigo: String,
    pub nombre_completo: String,
    pub dni: Option<String>,
    pub sexo: Option<String>,
}
