//! Utilidades JWT
//!
//! Firma y verificación de los tokens de sesión (HS256). Los claims llevan el id
//! del usuario en `sub`, su username y los códigos de rol.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del JWT token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,        // user_id
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,         // expiration timestamp
    pub iat: usize,         // issued at timestamp
}

impl JwtClaims {
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))
    }
}

/// Firma y verifica tokens con un secreto compartido
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration: u64,
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCodec")
            .field("expiration", &self.expiration)
            .finish_non_exhaustive()
    }
}

impl From<&EnvironmentConfig> for JwtCodec {
    fn from(config: &EnvironmentConfig) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expiration)
    }
}

impl JwtCodec {
    pub fn new(secret: &str, expiration: u64) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiration,
        }
    }

    /// Vigencia configurada en segundos
    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    /// Generar JWT token para un usuario
    pub fn generate_token(
        &self,
        user_id: i64,
        username: &str,
        roles: &[String],
    ) -> Result<String, AppError> {
        let now = chrono::Utc::now();
        let expires_at = i64::try_from(self.expiration)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::Internal(format!("Vigencia de token fuera de rango: {}s", self.expiration))
            })?;

        let claims = JwtClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            roles: roles.to_vec(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        self.sign(&claims)
    }

    pub fn sign(&self, claims: &JwtClaims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Error generando token: {}", e)))
    }

    /// Verificar firma y expiración y decodificar los claims
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rechazado: {}", e);
                AppError::Unauthorized("Token inválido o expirado".to_string())
            })
    }
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Falta token (Bearer ...)".to_string()))?;

    Ok(token)
}
