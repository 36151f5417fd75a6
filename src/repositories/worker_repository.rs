use crate::models::{NewWorker, Worker};
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct WorkerRepository {
    pool: PgPool,
}

impl WorkerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Worker>, AppError> {
        let workers = sqlx::query_as::<_, Worker>(
            r#"
            SELECT id, codigo, nombre_completo, dni, sexo, activo
            FROM trabajadores
            ORDER BY nombre_completo, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(workers)
    }

    pub async fn codigo_exists(&self, codigo: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM trabajadores WHERE codigo = $1)")
                .bind(codigo)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn create(&self, worker: &NewWorker) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO trabajadores (codigo, nombre_completo, dni, sexo)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&worker.codigo)
        .bind(&worker.nombre_completo)
        .bind(&worker.dni)
        .bind(&worker.sexo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, "El código ya existe"))?;

        Ok(id)
    }
}
