use serde::Deserialize;

// GET /areas?tipo=APOYO_HORAS | TRABAJO_AVANCE | SANEAMIENTO
#[derive(Debug, Default, Deserialize)]
pub struct AreasQuery {
    pub tipo: Option<String>,
}
