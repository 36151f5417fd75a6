//! Modelo de User
//!
//! Mapea la tabla `users` y el catálogo de roles.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Rol asignado por defecto cuando el registro no pide ninguno
pub const DEFAULT_ROLE: &str = "PLANILLERO";

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub nombre: String,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: i64,
    pub codigo: String,
}
