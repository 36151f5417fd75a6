//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable: el pool es la única
//! vía hacia los datos y la configuración es de sólo lectura.

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::{config::environment::EnvironmentConfig, utils::jwt::JwtCodec};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<EnvironmentConfig>,
    pub jwt: JwtCodec,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let jwt = JwtCodec::from(&config);
        Self {
            pool,
            config: Arc::new(config),
            jwt,
        }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for JwtCodec {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}

impl FromRef<AppState> for Arc<EnvironmentConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
