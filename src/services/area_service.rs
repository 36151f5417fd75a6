//! Servicio de áreas

use sqlx::PgPool;

use crate::{
    models::{Area, ReportType},
    repositories::AreaRepository,
    utils::errors::{validation_error, AppResult},
};

pub const INVALID_TIPO: &str = "tipo inválido. Usa: APOYO_HORAS | TRABAJO_AVANCE | SANEAMIENTO";

pub struct AreaService {
    areas: AreaRepository,
}

impl AreaService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            areas: AreaRepository::new(pool),
        }
    }

    /// Áreas activas, opcionalmente sólo las habilitadas para un tipo de reporte
    pub async fn list_areas(&self, tipo: Option<&str>) -> AppResult<Vec<Area>> {
        match parse_tipo_filter(tipo)? {
            None => self.areas.list_active().await,
            Some(tipo) => self.areas.list_active_with_flag(tipo.capability()).await,
        }
    }
}

/// `tipo` vacío equivale a no filtrar; cualquier otro valor debe coincidir exacto
pub fn parse_tipo_filter(tipo: Option<&str>) -> AppResult<Option<ReportType>> {
    match tipo.filter(|t| !t.trim().is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<ReportType>()
            .map(Some)
            .map_err(|_| validation_error("tipo", INVALID_TIPO)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tipo_filter() {
        assert_eq!(parse_tipo_filter(None).unwrap(), None);
        assert_eq!(parse_tipo_filter(Some("")).unwrap(), None);
        assert_eq!(
            parse_tipo_filter(Some("APOYO_HORAS")).unwrap(),
            Some(ReportType::ApoyoHoras)
        );
        assert_eq!(
            parse_tipo_filter(Some("SANEAMIENTO")).unwrap(),
            Some(ReportType::Saneamiento)
        );
        assert!(parse_tipo_filter(Some("BAD")).is_err());
        assert!(parse_tipo_filter(Some("es_apoyo_horas")).is_err());
    }

    #[test]
    fn test_parse_tipo_filter_rejects_padding() {
        assert_eq!(parse_tipo_filter(Some("   ")).unwrap(), None);
        assert!(parse_tipo_filter(Some("APOYO_HORAS ")).is_err());
        assert!(parse_tipo_filter(Some(" TRABAJO_AVANCE")).is_err());
    }
}
