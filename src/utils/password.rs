//! Hash de contraseñas con bcrypt

use bcrypt::{hash, verify, DEFAULT_COST};
use std::sync::OnceLock;

use crate::utils::errors::AppError;

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Hash de relleno con el mismo costo que los reales, generado una sola vez
fn dummy_hash() -> Option<&'static str> {
    DUMMY_HASH
        .get_or_init(|| hash("trabunda-usuario-inexistente", DEFAULT_COST).ok())
        .as_deref()
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST).map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))
}

/// Un hash corrupto en la base se trata como contraseña incorrecta
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match verify(password, password_hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::error!("Hash de contraseña ilegible: {}", e);
            false
        }
    }
}

/// Verificación contra el hash de relleno para usuarios que no existen.
/// Siempre es `false`, pero cuesta lo mismo que una verificación real.
pub fn verify_unknown_user(password: &str) -> bool {
    if let Some(dummy) = dummy_hash() {
        let _ = verify(password, dummy);
    }
    false
}
