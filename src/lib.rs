//! Sakila API: customer and rental CRUD over PostgreSQL, with token auth.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use auth::{PasswordHasher, TokenService};
pub use config::{AppConfig, AuthConfig, DbConfig};
pub use error::AppError;
pub use model::{Customer, Rental, User};
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_tables, Store};
