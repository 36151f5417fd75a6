//! Conexión a PostgreSQL
//!
//! Envuelve el pool de SQLx que se inyecta en `AppState` y aplica las migraciones
//! embebidas del directorio `migrations/`.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::{
    database::{mask_database_url, DatabaseConfig},
    EnvironmentConfig,
};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Abrir el pool con la configuración del entorno
    pub async fn connect(config: &EnvironmentConfig) -> Result<Self> {
        let db_config = DatabaseConfig::from(config);
        info!(
            url = %mask_database_url(&db_config.url),
            max_connections = db_config.max_connections,
            "Conectando a PostgreSQL"
        );

        let pool = db_config
            .create_pool()
            .await
            .context("no se pudo conectar a la base de datos")?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Aplicar las migraciones pendientes
    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .context("error aplicando migraciones")?;
        info!("Migraciones aplicadas");
        Ok(())
    }
}
