//! Modelo de Reporte
//!
//! Cabecera de un reporte de turno. El nombre del área y del creador se guardan
//! como copia al momento de crear el reporte.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::report_type::{ReportType, Turno};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub fecha: NaiveDate,
    pub turno: String,
    pub tipo_reporte: String,
    pub area_id: i64,
    pub area_nombre: String,
    pub creado_por_user_id: i64,
    pub creado_por_nombre: String,
    pub observaciones: Option<String>,
    pub creado_en: DateTime<Utc>,
}

/// Datos ya validados para insertar un reporte
#[derive(Debug, Clone)]
pub struct NewReport {
    pub fecha: NaiveDate,
    pub turno: Turno,
    pub tipo_reporte: ReportType,
    pub area_id: i64,
    pub area_nombre: String,
    pub creado_por_user_id: i64,
    pub creado_por_nombre: String,
    pub observaciones: Option<String>,
}

/// Filtros del listado de reportes, todos opcionales y combinados con AND
#[derive(Debug, Clone, Default)]
pub struct ReportFilters {
    pub desde: Option<NaiveDate>,
    pub hasta: Option<NaiveDate>,
    pub tipo_reporte: Option<ReportType>,
    pub area_id: Option<i64>,
    pub turno: Option<Turno>,
    pub creado_por: Option<i64>,
    pub q: Option<String>,
}

pub const DEFAULT_PAGE_LIMIT: i64 = 20;
pub const MAX_PAGE_LIMIT: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Pagination {
    /// Valores no numéricos caen al default; page mínimo 1 y limit acotado a [1, 200]
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .max(1);
        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total + self.limit - 1) / self.limit
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Fecha,
    CreadoEn,
}

impl SortField {
    pub const fn column(self) -> &'static str {
        match self {
            SortField::Fecha => "r.fecha",
            SortField::CreadoEn => "r.creado_en",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub const fn sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// Orden del listado. Valores fuera de la lista blanca vuelven al default sin error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSort {
    pub field: SortField,
    pub dir: SortDir,
}

impl ReportSort {
    pub fn from_raw(ordenar: Option<&str>, dir: Option<&str>) -> Self {
        let field = match ordenar.map(str::trim) {
            Some("creado_en" | "creadoEn") => SortField::CreadoEn,
            _ => SortField::Fecha,
        };
        let dir = match dir.map(|d| d.trim().to_ascii_lowercase()) {
            Some(d) if d == "asc" => SortDir::Asc,
            _ => SortDir::Desc,
        };
        Self { field, dir }
    }

    pub fn order_by_clause(&self) -> String {
        format!(
            " ORDER BY {col} {dir}, r.id {dir}",
            col = self.field.column(),
            dir = self.dir.sql()
        )
    }
}
