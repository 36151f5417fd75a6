//! Servicio de reportes
//!
//! Alta de cabeceras de reporte validadas contra el área y el usuario
//! autenticado, consulta por id y listado con filtros y paginación.

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;

use crate::{
    dto::report_dto::{
        CreateReportRequest, CreateReportResponse, CreatorInfo, ListReportsQuery,
        PaginatedResponse,
    },
    middleware::auth::AuthenticatedUser,
    models::{NewReport, Pagination, Report, ReportFilters, ReportSort, ReportType, Turno},
    repositories::{AreaRepository, ReportRepository, UserRepository},
    utils::errors::{bad_request_error, validation_error, AppError, AppResult},
};

pub const AREA_NO_VALIDA: &str = "área no válida para este tipo de reporte";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Campos de la request ya interpretados
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub fecha: NaiveDate,
    pub turno: Turno,
    pub tipo_reporte: ReportType,
    pub area_id: i64,
    pub observaciones: Option<String>,
}

pub struct ReportService {
    reports: ReportRepository,
    areas: AreaRepository,
    users: UserRepository,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reports: ReportRepository::new(pool.clone()),
            areas: AreaRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn create_report(
        &self,
        identity: &AuthenticatedUser,
        request: CreateReportRequest,
    ) -> AppResult<CreateReportResponse> {
        let draft = parse_create_request(request)?;

        let creator = self
            .users
            .find_by_id(identity.id)
            .await?
            .filter(|u| u.activo)
            .ok_or_else(|| AppError::Unauthorized("Usuario no válido o inactivo".to_string()))?;

        // El área puede desactivarse entre esta lectura y el insert; se acepta esa carrera
        let area = self
            .areas
            .find_by_id(draft.area_id)
            .await?
            .filter(|a| a.accepts(draft.tipo_reporte))
            .ok_or_else(|| validation_error("areaId", AREA_NO_VALIDA))?;

        let new_report = NewReport {
            fecha: draft.fecha,
            turno: draft.turno,
            tipo_reporte: draft.tipo_reporte,
            area_id: area.id,
            area_nombre: area.nombre,
            creado_por_user_id: creator.id,
            creado_por_nombre: creator.nombre,
            observaciones: draft.observaciones,
        };
        let reporte_id = self.reports.create(&new_report).await?;

        info!(
            reporte_id,
            tipo = %new_report.tipo_reporte,
            area_id = new_report.area_id,
            user_id = new_report.creado_por_user_id,
            "Reporte creado"
        );

        Ok(CreateReportResponse {
            message: "Reporte creado correctamente".to_string(),
            reporte_id,
            area_nombre: new_report.area_nombre,
            creado_por: CreatorInfo {
                id: new_report.creado_por_user_id,
                nombre: new_report.creado_por_nombre,
            },
        })
    }

    pub async fn get_report(&self, id: i64) -> AppResult<Report> {
        self.reports
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reporte no encontrado".to_string()))
    }

    pub async fn list_reports(&self, query: ListReportsQuery) -> AppResult<PaginatedResponse<Report>> {
        let (filters, pagination, sort) = parse_list_query(query)?;
        let (items, total) = self.reports.list(&filters, &pagination, &sort).await?;

        Ok(PaginatedResponse {
            page: pagination.page,
            limit: pagination.limit,
            total,
            total_pages: pagination.total_pages(total),
            items,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Valor tal como llegó; sólo vacío o puros espacios cuenta como ausente
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_date(field: &'static str, raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| validation_error(field, "fecha inválida, usa YYYY-MM-DD"))
}

/// Valida presencia, enumeraciones y formato de fecha, en ese orden
pub fn parse_create_request(request: CreateReportRequest) -> AppResult<ReportDraft> {
    let fecha = non_blank(request.fecha);
    let turno = non_blank(request.turno);
    let tipo_reporte = non_blank(request.tipo_reporte);
    let area_id = request.area_id.filter(|id| *id > 0);

    let mut faltantes = Vec::new();
    if fecha.is_none() {
        faltantes.push("fecha");
    }
    if turno.is_none() {
        faltantes.push("turno");
    }
    if tipo_reporte.is_none() {
        faltantes.push("tipoReporte");
    }
    if area_id.is_none() {
        faltantes.push("areaId");
    }

    let (Some(fecha), Some(turno), Some(tipo_reporte), Some(area_id)) =
        (fecha, turno, tipo_reporte, area_id)
    else {
        return Err(bad_request_error(&format!(
            "Faltan campos obligatorios: {}",
            faltantes.join(", ")
        )));
    };

    let turno = turno
        .parse::<Turno>()
        .map_err(|_| validation_error("turno", "turno no válido"))?;
    let tipo_reporte = tipo_reporte
        .parse::<ReportType>()
        .map_err(|_| validation_error("tipoReporte", "tipoReporte no válido"))?;
    let fecha = parse_date("fecha", &fecha)?;

    Ok(ReportDraft {
        fecha,
        turno,
        tipo_reporte,
        area_id,
        observaciones: non_blank(request.observaciones),
    })
}

/// Interpreta la query de GET /reportes. Filtros mal formados son error; paginación y orden no.
pub fn parse_list_query(
    query: ListReportsQuery,
) -> AppResult<(ReportFilters, Pagination, ReportSort)> {
    let desde = present(query.desde)
        .map(|d| parse_date("desde", &d))
        .transpose()?;
    let hasta = present(query.hasta)
        .map(|h| parse_date("hasta", &h))
        .transpose()?;
    let tipo_reporte = non_blank(query.tipo_reporte)
        .map(|t| {
            t.parse::<ReportType>()
                .map_err(|_| validation_error("tipoReporte", "tipoReporte no válido"))
        })
        .transpose()?;
    let turno = non_blank(query.turno)
        .map(|t| {
            t.parse::<Turno>()
                .map_err(|_| validation_error("turno", "turno no válido"))
        })
        .transpose()?;
    let area_id = present(query.area_id)
        .map(|a| {
            a.parse::<i64>()
                .map_err(|_| validation_error("areaId", "areaId debe ser numérico"))
        })
        .transpose()?;
    let creado_por = present(query.creado_por)
        .map(|c| {
            c.parse::<i64>()
                .map_err(|_| validation_error("creadoPor", "creadoPor debe ser numérico"))
        })
        .transpose()?;

    let filters = ReportFilters {
        desde,
        hasta,
        tipo_reporte,
        area_id,
        turno,
        creado_por,
        q: present(query.q),
    };
    let pagination = Pagination::from_raw(query.page.as_deref(), query.limit.as_deref());
    let sort = ReportSort::from_raw(query.ordenar.as_deref(), query.dir.as_deref());

    Ok((filters, pagination, sort))
}
