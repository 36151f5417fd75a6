//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores,
//! JWT y hash de contraseñas.

pub mod errors;
pub mod jwt;
pub mod password;
