//! Modelo de Área
//!
//! Mapea la tabla `areas`. Un área sirve para un tipo de reporte sólo si está
//! activa y su flag de capacidad correspondiente está en true.

use serde::Serialize;
use sqlx::FromRow;

use super::report_type::{CapabilityFlag, ReportType};

/// Se serializa con los nombres de columna de la tabla
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Area {
    pub id: i64,
    pub nombre: String,
    pub es_apoyo_horas: bool,
    pub es_conteo_rapido: bool,
    pub es_trabajo_avance: bool,
    pub activo: bool,
}

impl Area {
    pub fn has_capability(&self, flag: CapabilityFlag) -> bool {
        match flag {
            CapabilityFlag::ApoyoHoras => self.es_apoyo_horas,
            CapabilityFlag::TrabajoAvance => self.es_trabajo_avance,
            CapabilityFlag::ConteoRapido => self.es_conteo_rapido,
        }
    }

    pub fn accepts(&self, tipo: ReportType) -> bool {
        self.activo && self.has_capability(tipo.capability())
    }
}
