//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todo se lee una sola vez al arrancar y se comparte inmutable vía `AppState`.

use anyhow::{anyhow, Context, Result};
use std::{collections::HashMap, env, str::FromStr, time::Duration};

/// Origen de los roles del usuario autenticado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSource {
    /// Roles tomados de los claims del token, sin consultar la base
    Token,
    /// Roles y estado activo re-leídos de la base en cada request
    Database,
}

impl FromStr for RoleSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" | "" => Ok(RoleSource::Token),
            "database" | "db" => Ok(RoleSource::Database),
            other => Err(anyhow!("AUTH_ROLE_SOURCE inválido: '{}' (usa token | database)", other)),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub run_migrations: bool,
    pub jwt_secret: String,
    /// Vigencia del token en segundos
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub role_source: RoleSource,
    /// Roles con permiso para crear reportes; vacío = cualquier usuario autenticado
    pub reportes_write_roles: Vec<String>,
}

pub const DEFAULT_JWT_EXPIRATION: u64 = 12 * 60 * 60;
pub const MAX_JWT_EXPIRATION: u64 = 365 * 24 * 60 * 60;

impl EnvironmentConfig {
    /// Cargar configuración desde el entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar configuración desde un mapa, útil para tests
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let jwt_expiration = match get("JWT_EXPIRES_IN") {
            Some(raw) => parse_duration_secs(&raw)
                .with_context(|| format!("JWT_EXPIRES_IN inválido: '{}'", raw))?,
            None => DEFAULT_JWT_EXPIRATION,
        };
        if jwt_expiration > MAX_JWT_EXPIRATION {
            return Err(anyhow!(
                "JWT_EXPIRES_IN no puede superar {} segundos (365d)",
                MAX_JWT_EXPIRATION
            ));
        }

        Ok(Self {
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", get("PORT"), 3000)?,
            database_url: get("DATABASE_URL").context("DATABASE_URL must be set")?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 10)?,
            db_acquire_timeout: Duration::from_secs(parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                get("DB_ACQUIRE_TIMEOUT_SECS"),
                5,
            )?),
            run_migrations: parse_or("RUN_MIGRATIONS", get("RUN_MIGRATIONS"), false)?,
            jwt_secret: get("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_expiration,
            cors_origins: split_list(get("CORS_ORIGINS")),
            role_source: get("AUTH_ROLE_SOURCE")
                .map(|v| v.parse::<RoleSource>())
                .transpose()?
                .unwrap_or(RoleSource::Token),
            reportes_write_roles: split_list(get("REPORTES_WRITE_ROLES")),
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} inválido ('{}'): {}", key, v, e)),
        None => Ok(default),
    }
}

fn split_list(raw: Option<String>) -> Vec<String> {
    raw.map(|v| {
        v.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Interpreta duraciones como "12h", "30m", "45s", "7d" o segundos sin sufijo
pub fn parse_duration_secs(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    let (number, factor) = match raw.chars().last() {
        Some('s') => (&raw[..raw.len() - 1], 1),
        Some('m') => (&raw[..raw.len() - 1], 60),
        Some('h') => (&raw[..raw.len() - 1], 60 * 60),
        Some('d') => (&raw[..raw.len() - 1], 24 * 60 * 60),
        _ => (raw, 1),
    };
    let value: u64 = number.trim().parse()?;
    if value == 0 {
        return Err(anyhow!("la duración debe ser mayor que cero"));
    }
    value
        .checked_mul(factor)
        .ok_or_else(|| anyhow!("duración fuera de rango"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_vars() -> HashMap<String, String> {
        HashMap::from([
            ("DATABASE_URL".to_string(), "postgres://u:p@localhost/trabunda".to_string()),
            ("JWT_SECRET".to_string(), "secreto".to_string()),
        ])
    }

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::from_map(&base_vars()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.jwt_expiration, DEFAULT_JWT_EXPIRATION);
        assert_eq!(config.role_source, RoleSource::Token);
        assert!(config.reportes_write_roles.is_empty());
        assert!(!config.run_migrations);
        assert_eq!(config.db_acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let mut vars = base_vars();
        vars.remove("JWT_SECRET");
        assert!(EnvironmentConfig::from_map(&vars).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut vars = base_vars();
        vars.insert("JWT_EXPIRES_IN".into(), "30m".into());
        vars.insert("AUTH_ROLE_SOURCE".into(), "database".into());
        vars.insert("REPORTES_WRITE_ROLES".into(), "PLANILLERO, ADMIN,".into());
        vars.insert("PORT".into(), "8080".into());
        let config = EnvironmentConfig::from_map(&vars).unwrap();
        assert_eq!(config.jwt_expiration, 1800);
        assert_eq!(config.role_source, RoleSource::Database);
        assert_eq!(config.reportes_write_roles, vec!["PLANILLERO", "ADMIN"]);
        assert_eq!(config.server_url(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_values() {
        let mut vars = base_vars();
        vars.insert("PORT".into(), "abc".into());
        assert!(EnvironmentConfig::from_map(&vars).is_err());

        let mut vars = base_vars();
        vars.insert("AUTH_ROLE_SOURCE".into(), "ldap".into());
        assert!(EnvironmentConfig::from_map(&vars).is_err());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration_secs("12h").unwrap(), 43200);
        assert_eq!(parse_duration_secs("90").unwrap(), 90);
        assert_eq!(parse_duration_secs("2d").unwrap(), 172800);
        assert!(parse_duration_secs("0s").is_err());
        assert!(parse_duration_secs("doce").is_err());
        assert!(parse_duration_secs("18446744073709551615d").is_err());
    }

    #[test]
    fn test_jwt_expiration_ceiling() {
        let mut vars = base_vars();
        vars.insert("JWT_EXPIRES_IN".into(), "365d".into());
        assert_eq!(
            EnvironmentConfig::from_map(&vars).unwrap().jwt_expiration,
            MAX_JWT_EXPIRATION
        );

        for raw in ["366d", "10000000000000", "18446744073709551615"] {
            let mut vars = base_vars();
            vars.insert("JWT_EXPIRES_IN".into(), raw.into());
            assert!(EnvironmentConfig::from_map(&vars).is_err(), "{}", raw);
        }
    }
}
