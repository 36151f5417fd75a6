//! TRABUNDA backend
//!
//! API HTTP para registrar reportes de turno por área, con autenticación por
//! usuario/contraseña, JWT y autorización por roles.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
