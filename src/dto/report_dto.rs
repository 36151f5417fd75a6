use serde::{Deserialize, Serialize};

// Request para crear un reporte; los campos se validan en el servicio
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub fecha: Option<String>,
    pub turno: Option<String>,
    #[serde(alias = "tipo_reporte")]
    pub tipo_reporte: Option<String>,
    #[serde(alias = "area_id")]
    pub area_id: Option<i64>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatorInfo {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportResponse {
    pub message: String,
    pub reporte_id: i64,
    pub area_nombre: String,
    pub creado_por: CreatorInfo,
}

// Query string de GET /reportes. Todo llega como texto y se interpreta en el servicio.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReportsQuery {
    pub desde: Option<String>,
    pub hasta: Option<String>,
    #[serde(alias = "tipo_reporte")]
    pub tipo_reporte: Option<String>,
    #[serde(alias = "area_id")]
    pub area_id: Option<String>,
    pub turno: Option<String>,
    #[serde(alias = "creatorId", alias = "creado_por_user_id")]
    pub creado_por: Option<String>,
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub ordenar: Option<String>,
    pub dir: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub items: Vec<T>,
}
