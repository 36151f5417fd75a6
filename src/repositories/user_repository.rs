use crate::models::{Role, User};
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, nombre, activo, creado_en
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, nombre, activo, creado_en
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Roles del catálogo cuyo código está en `codes`
    pub async fn find_roles_by_codes(&self, codes: &[String]) -> Result<Vec<Role>, AppError> {
        let roles = sqlx::query_as::<_, Role>(
            "SELECT id, codigo FROM roles WHERE codigo = ANY($1) ORDER BY codigo",
        )
        .bind(codes)
        .fetch_all(&self.pool)
        .await?;

        Ok(roles)
    }

    pub async fn role_codes_for_user(&self, user_id: i64) -> Result<Vec<String>, AppError> {
        let codes: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT r.codigo
            FROM user_roles ur
            JOIN roles r ON r.id = ur.role_id
            WHERE ur.user_id = $1
            ORDER BY r.codigo
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(codes.into_iter().map(|(codigo,)| codigo).collect())
    }

    /// Crea el usuario y sus vínculos de rol en una sola transacción
    pub async fn create_with_roles(
        &self,
        username: &str,
        password_hash: &str,
        nombre: &str,
        role_ids: &[i64],
    ) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        let (user_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (username, password_hash, nombre)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(nombre)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_unique_violation(e, "El username ya existe"))?;

        for role_id in role_ids {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
                .bind(user_id)
                .bind(*role_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(user_id)
    }
}
