//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. Cada servicio
//! valida la entrada, consulta sus repositorios y arma la respuesta.

pub mod area_service;
pub mod auth_service;
pub mod report_service;
pub mod worker_service;

pub use area_service::AreaService;
pub use auth_service::AuthService;
pub use report_service::ReportService;
pub use worker_service::WorkerService;
