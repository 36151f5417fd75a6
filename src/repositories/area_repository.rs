use crate::models::{Area, CapabilityFlag};
use crate::utils::errors::AppError;
use sqlx::PgPool;

const AREA_COLUMNS: &str =
    "id, nombre, es_apoyo_horas, es_conteo_rapido, es_trabajo_avance, activo";

pub struct AreaRepository {
    pool: PgPool,
}

impl AreaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_active(&self) -> Result<Vec<Area>, AppError> {
        let areas = sqlx::query_as::<_, Area>(&format!(
            "SELECT {AREA_COLUMNS} FROM areas WHERE activo = TRUE ORDER BY nombre, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(areas)
    }

    /// Áreas activas con el flag indicado en true
    pub async fn list_active_with_flag(&self, flag: CapabilityFlag) -> Result<Vec<Area>, AppError> {
        // flag.column() sale de una tabla fija, no de la request
        let areas = sqlx::query_as::<_, Area>(&format!(
            "SELECT {AREA_COLUMNS} FROM areas WHERE activo = TRUE AND {} = TRUE ORDER BY nombre, id",
            flag.column()
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(areas)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Area>, AppError> {
        let area = sqlx::query_as::<_, Area>(&format!(
            "SELECT {AREA_COLUMNS} FROM areas WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(area)
    }
}
