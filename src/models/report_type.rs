//! Enumeraciones de dominio de los reportes
//!
//! `ReportType` y `Turno` son conjuntos cerrados. El tipo de reporte además
//! determina qué flag de capacidad de la tabla `areas` habilita un área.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Tipo de reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    Saneamiento,
    ApoyoHoras,
    TrabajoAvance,
}

/// Flag de capacidad de un área
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityFlag {
    ApoyoHoras,
    TrabajoAvance,
    ConteoRapido,
}

impl CapabilityFlag {
    /// Nombre de la columna en `areas`. Tabla fija: nunca se interpola texto del cliente.
    pub const fn column(self) -> &'static str {
        match self {
            CapabilityFlag::ApoyoHoras => "es_apoyo_horas",
            CapabilityFlag::TrabajoAvance => "es_trabajo_avance",
            CapabilityFlag::ConteoRapido => "es_conteo_rapido",
        }
    }
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [
        ReportType::Saneamiento,
        ReportType::ApoyoHoras,
        ReportType::TrabajoAvance,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ReportType::Saneamiento => "SANEAMIENTO",
            ReportType::ApoyoHoras => "APOYO_HORAS",
            ReportType::TrabajoAvance => "TRABAJO_AVANCE",
        }
    }

    // SANEAMIENTO todavía no tiene flag propio y usa es_conteo_rapido
    pub const fn capability(self) -> CapabilityFlag {
        match self {
            ReportType::ApoyoHoras => CapabilityFlag::ApoyoHoras,
            ReportType::TrabajoAvance => CapabilityFlag::TrabajoAvance,
            ReportType::Saneamiento => CapabilityFlag::ConteoRapido,
        }
    }
}

impl FromStr for ReportType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turno de trabajo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turno {
    #[serde(rename = "Mañana")]
    Manana,
    Tarde,
    Noche,
    #[serde(rename = "Día")]
    Dia,
}

impl Turno {
    pub const ALL: [Turno; 4] = [Turno::Manana, Turno::Tarde, Turno::Noche, Turno::Dia];

    pub const fn as_str(self) -> &'static str {
        match self {
            Turno::Manana => "Mañana",
            Turno::Tarde => "Tarde",
            Turno::Noche => "Noche",
            Turno::Dia => "Día",
        }
    }
}

impl FromStr for Turno {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Turno::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Turno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
