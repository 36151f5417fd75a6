use serde::{Deserialize, Serialize};
use validator::Validate;

// Request de registro
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "Falta el campo username"),
        length(min = 1, message = "Falta el campo username")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Falta el campo password"),
        length(min = 1, message = "Falta el campo password")
    )]
    pub password: Option<String>,

    #[validate(
        required(message = "Falta el campo nombre"),
        length(min = 1, message = "Falta el campo nombre")
    )]
    #[serde(alias = "displayName")]
    pub nombre: Option<String>,

    pub roles: Option<Vec<String>>,
}

// Response de registro
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
    pub roles: Vec<String>,
}

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "Falta el campo username"),
        length(min = 1, message = "Falta el campo username")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Falta el campo password"),
        length(min = 1, message = "Falta el campo password")
    )]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUser {
    pub id: i64,
    pub username: String,
    pub nombre: String,
    pub roles: Vec<String>,
}

// Login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub expires_in: u64,
    pub user: LoginUser,
}
