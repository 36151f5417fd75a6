use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para registrar un trabajador
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerRequest {
    #[validate(
        required(message = "Falta el campo codigo"),
        length(min = 1, message = "Falta el campo codigo")
    )]
    pub codigo: Option<String>,

    #[validate(
        required(message = "Falta el campo nombreCompleto"),
        length(min = 1, message = "Falta el campo nombreCompleto")
    )]
    #[serde(alias = "nombre_completo")]
    pub nombre_completo: Option<String>,

    pub dni: Option<String>,
    pub sexo: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerResponse {
    pub message: String,
    pub trabajador_id: i64,
}
