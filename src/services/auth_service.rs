//! Servicio de autenticación
//!
//! Registro de usuarios con asignación de roles y login con emisión de JWT.

use sqlx::PgPool;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    dto::auth_dto::{LoginRequest, LoginResponse, LoginUser, RegisterRequest, RegisterResponse},
    models::DEFAULT_ROLE,
    repositories::UserRepository,
    utils::{
        errors::{validation_error, AppError, AppResult},
        jwt::JwtCodec,
        password::{hash_password, verify_password, verify_unknown_user},
    },
};

const INVALID_CREDENTIALS: &str = "Credenciales inválidas";

pub struct AuthService {
    users: UserRepository,
    jwt: JwtCodec,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt: JwtCodec) -> Self {
        Self {
            users: UserRepository::new(pool),
            jwt,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        request.validate()?;

        let username = request.username.unwrap_or_default().trim().to_string();
        let nombre = request.nombre.unwrap_or_default().trim().to_string();
        let password = request.password.unwrap_or_default();
        if username.is_empty() {
            return Err(validation_error("username", "Falta el campo username"));
        }
        if nombre.is_empty() {
            return Err(validation_error("nombre", "Falta el campo nombre"));
        }
        let role_codes = resolve_requested_roles(request.roles);

        if self.users.username_exists(&username).await? {
            return Err(AppError::Conflict("El username ya existe".to_string()));
        }

        let roles = self.users.find_roles_by_codes(&role_codes).await?;
        if roles.len() != role_codes.len() {
            warn!(username = %username, requested = ?role_codes, "Registro con roles inexistentes");
            return Err(validation_error("roles", "Uno o más roles no existen"));
        }

        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Tarea de hash interrumpida: {}", e)))??;

        let role_ids: Vec<i64> = roles.iter().map(|r| r.id).collect();
        let user_id = self
            .users
            .create_with_roles(&username, &password_hash, &nombre, &role_ids)
            .await?;

        info!(user_id, username = %username, roles = ?role_codes, "Usuario registrado");

        Ok(RegisterResponse {
            message: "Usuario creado".to_string(),
            user_id,
            roles: role_codes,
        })
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let username = request.username.unwrap_or_default().trim().to_string();
        let password = request.password.unwrap_or_default();

        let Some(user) = self.users.find_by_username(&username).await? else {
            // Mismo trabajo de bcrypt que con un usuario real
            let _ = tokio::task::spawn_blocking(move || verify_unknown_user(&password)).await;
            warn!(username = %username, "Login con usuario inexistente");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        let password_hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
            .await
            .map_err(|e| AppError::Internal(format!("Tarea de verificación interrumpida: {}", e)))?;

        if !valid {
            warn!(username = %username, "Login con contraseña incorrecta");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        if !user.activo {
            return Err(AppError::Forbidden("Usuario desactivado".to_string()));
        }

        let roles = self.users.role_codes_for_user(user.id).await?;
        let token = self.jwt.generate_token(user.id, &user.username, &roles)?;

        info!(user_id = user.id, username = %user.username, "Login correcto");

        Ok(LoginResponse {
            message: "LOGIN OK".to_string(),
            token,
            expires_in: self.jwt.expiration(),
            user: LoginUser {
                id: user.id,
                username: user.username,
                nombre: user.nombre,
                roles,
            },
        })
    }
}

/// Normaliza los roles pedidos: sin vacíos ni duplicados, con el rol base si no queda ninguno
pub fn resolve_requested_roles(requested: Option<Vec<String>>) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for code in requested.unwrap_or_default() {
        let code = code.trim();
        if !code.is_empty() && !codes.iter().any(|c| c == code) {
            codes.push(code.to_string());
        }
    }

    if codes.is_empty() {
        codes.push(DEFAULT_ROLE.to_string());
    }
    codes
}
