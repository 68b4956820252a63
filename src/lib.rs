//! Resource service: a SQLite-backed CRUD REST backend, plus the triangular-sum exercise.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod triangular;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{Resource, ResourceInput, ResourceRecord};
pub use routes::{app, common_routes, resource_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::Store;
