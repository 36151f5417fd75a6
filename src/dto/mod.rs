//! DTOs de la API
//!
//! Requests y responses JSON. Las claves van en camelCase; se aceptan los
//! alias snake_case del cliente anterior.

pub mod area_dto;
pub mod auth_dto;
pub mod report_dto;
pub mod worker_dto;
