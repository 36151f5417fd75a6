//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean las tablas
//! PostgreSQL y las enumeraciones de dominio.

pub mod area;
pub mod report;
pub mod report_type;
pub mod user;
pub mod worker;

pub use area::Area;
pub use report::{NewReport, Pagination, Report, ReportFilters, ReportSort, SortDir, SortField};
pub use report_type::{CapabilityFlag, ReportType, Turno};
pub use user::{Role, User, DEFAULT_ROLE};
pub use worker::{NewWorker, Worker};
