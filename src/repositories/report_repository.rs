use crate::models::{NewReport, Pagination, Report, ReportFilters, ReportSort};
use crate::utils::errors::AppError;
use sqlx::{PgPool, Postgres, QueryBuilder};

const REPORT_SELECT: &str = r#"
    SELECT
        r.id,
        r.fecha,
        r.turno,
        r.tipo_reporte,
        r.area_id,
        COALESCE(a.nombre, r.area) AS area_nombre,
        r.creado_por_user_id,
        r.creado_por_nombre,
        r.observaciones,
        r.creado_en
    FROM reportes r
    LEFT JOIN areas a ON a.id = r.area_id
"#;

const REPORT_COUNT: &str = r#"
    SELECT COUNT(*)
    FROM reportes r
    LEFT JOIN areas a ON a.id = r.area_id
"#;

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, report: &NewReport) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO reportes
                (fecha, turno, tipo_reporte, area, area_id, creado_por_user_id, creado_por_nombre, observaciones)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(report.fecha)
        .bind(report.turno.as_str())
        .bind(report.tipo_reporte.as_str())
        .bind(&report.area_nombre)
        .bind(report.area_id)
        .bind(report.creado_por_user_id)
        .bind(&report.creado_por_nombre)
        .bind(&report.observaciones)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Report>, AppError> {
        let report = sqlx::query_as::<_, Report>(&format!("{REPORT_SELECT} WHERE r.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(report)
    }

    /// Página de reportes y total de filas que cumplen los filtros
    pub async fn list(
        &self,
        filters: &ReportFilters,
        pagination: &Pagination,
        sort: &ReportSort,
    ) -> Result<(Vec<Report>, i64), AppError> {
        let mut count_query = QueryBuilder::<Postgres>::new(REPORT_COUNT);
        push_filters(&mut count_query, filters);
        let (total,) = count_query
            .build_query_as::<(i64,)>()
            .fetch_one(&self.pool)
            .await?;

        let mut items_query = QueryBuilder::<Postgres>::new(REPORT_SELECT);
        push_filters(&mut items_query, filters);
        items_query.push(sort.order_by_clause());
        items_query
            .push(" LIMIT ")
            .push_bind(pagination.limit)
            .push(" OFFSET ")
            .push_bind(pagination.offset());

        let items = items_query
            .build_query_as::<Report>()
            .fetch_all(&self.pool)
            .await?;

        Ok((items, total))
    }
}

/// Agrega el WHERE compartido por el listado y el conteo
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filters: &ReportFilters) {
    query.push(" WHERE TRUE");

    if let Some(desde) = filters.desde {
        query.push(" AND r.fecha >= ").push_bind(desde);
    }
    if let Some(hasta) = filters.hasta {
        query.push(" AND r.fecha <= ").push_bind(hasta);
    }
    if let Some(tipo) = filters.tipo_reporte {
        query.push(" AND r.tipo_reporte = ").push_bind(tipo.as_str());
    }
    if let Some(area_id) = filters.area_id {
        query.push(" AND r.area_id = ").push_bind(area_id);
    }
    if let Some(turno) = filters.turno {
        query.push(" AND r.turno = ").push_bind(turno.as_str());
    }
    if let Some(creado_por) = filters.creado_por {
        query.push(" AND r.creado_por_user_id = ").push_bind(creado_por);
    }
    if let Some(q) = filters.q.as_deref() {
        let pattern = format!("%{}%", escape_like(q));
        query
            .push(" AND (COALESCE(r.observaciones, '') ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR r.area ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR COALESCE(a.nombre, '') ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR r.creado_por_nombre ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

/// Escapa comodines de LIKE para que `q` se busque literal
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReportType, SortDir, SortField, Turno};
    use chrono::NaiveDate;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\tmp"), "c:\\\\tmp");
        assert_eq!(escape_like("limpieza"), "limpieza");
    }

    #[test]
    fn test_no_filters_produces_open_predicate() {
        let mut query = QueryBuilder::<Postgres>::new("SELECT 1 FROM reportes r");
        push_filters(&mut query, &ReportFilters::default());
        assert_eq!(query.sql(), "SELECT 1 FROM reportes r WHERE TRUE");
    }

    #[test]
    fn test_all_filters_are_bound_not_interpolated() {
        let filters = ReportFilters {
            desde: NaiveDate::from_ymd_opt(2025, 1, 1),
            hasta: NaiveDate::from_ymd_opt(2025, 1, 31),
            tipo_reporte: Some(ReportType::ApoyoHoras),
            area_id: Some(3),
            turno: Some(Turno::Noche),
            creado_por: Some(7),
            q: Some("'; DROP TABLE reportes; --".to_string()),
        };
        let mut query = QueryBuilder::<Postgres>::new("SELECT 1 FROM reportes r");
        push_filters(&mut query, &filters);
        let sql = query.sql();

        assert!(sql.contains("r.fecha >= $1"));
        assert!(sql.contains("r.fecha <= $2"));
        assert!(sql.contains("r.tipo_reporte = $3"));
        assert!(sql.contains("r.area_id = $4"));
        assert!(sql.contains("r.turno = $5"));
        assert!(sql.contains("r.creado_por_user_id = $6"));
        assert!(sql.contains("r.creado_por_nombre ILIKE $10"));
        assert!(!sql.contains("DROP TABLE"));
        assert!(!sql.contains("APOYO_HORAS"));
    }

    #[test]
    fn test_order_and_window_follow_filters() {
        let mut query = QueryBuilder::<Postgres>::new("SELECT 1 FROM reportes r");
        push_filters(&mut query, &ReportFilters::default());
        query.push(
            ReportSort {
                field: SortField::CreadoEn,
                dir: SortDir::Asc,
            }
            .order_by_clause(),
        );
        query.push(" LIMIT ").push_bind(20_i64);
        assert_eq!(
            query.sql(),
            "SELECT 1 FROM reportes r WHERE TRUE ORDER BY r.creado_en ASC, r.id ASC LIMIT $1"
        );
    }
}
