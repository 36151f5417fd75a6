//! Middleware de autenticación JWT
//!
//! Este módulo maneja la autenticación JWT, extracción de tokens
//! y verificación de roles del usuario autenticado.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{
    config::environment::RoleSource,
    repositories::UserRepository,
    state::AppState,
    utils::{errors::AppError, jwt::extract_token_from_header},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_any_role(&self, allowed: &[String]) -> bool {
        allowed.iter().any(|role| self.roles.contains(role))
    }
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let token = extract_token_from_header(auth_header)?;

    let claims = state.jwt.verify_token(token)?;
    let user_id = claims.user_id()?;

    let authenticated_user = match state.config.role_source {
        RoleSource::Token => AuthenticatedUser {
            id: user_id,
            username: claims.username,
            roles: claims.roles,
        },
        RoleSource::Database => {
            // Revocación inmediata: usuario desactivado o roles retirados
            let users = UserRepository::new(state.pool.clone());
            let user = users
                .find_by_id(user_id)
                .await?
                .filter(|u| u.activo)
                .ok_or_else(|| AppError::Unauthorized("Usuario no válido o inactivo".to_string()))?;
            let roles = users.role_codes_for_user(user.id).await?;
            AuthenticatedUser {
                id: user.id,
                username: user.username,
                roles,
            }
        }
    };

    // Inyectar usuario autenticado en las extensions
    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Roles aceptados por `require_role`
#[derive(Debug, Clone)]
pub struct RequiredRoles(Arc<[String]>);

impl RequiredRoles {
    pub fn new(roles: impl IntoIterator<Item = String>) -> Self {
        Self(roles.into_iter().collect())
    }

    pub fn check(&self, user: &AuthenticatedUser) -> Result<(), AppError> {
        if user.has_any_role(&self.0) {
            Ok(())
        } else {
            Err(AppError::Forbidden("No autorizado (rol insuficiente)".to_string()))
        }
    }
}

/// Middleware de autorización por roles; va siempre detrás de `auth_middleware`
pub async fn require_role(
    State(required): State<RequiredRoles>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("Falta token (Bearer ...)".to_string()))?;

    required.check(user)?;

    Ok(next.run(request).await)
}
