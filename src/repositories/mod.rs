//! Repositorios
//!
//! Acceso a PostgreSQL. Cada repositorio recibe el pool por constructor y
//! no guarda estado propio.

pub mod area_repository;
pub mod report_repository;
pub mod user_repository;
pub mod worker_repository;

pub use area_repository::AreaRepository;
pub use report_repository::ReportRepository;
pub use user_repository::UserRepository;
pub use worker_repository::WorkerRepository;
