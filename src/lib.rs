//! Advertisement service: CRUD over a single `advertisements` table, served as JSON over HTTP.

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

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError};
pub use extractors::{AdvId, UnitOfWork};
pub use model::Advertisement;
pub use routes::{adv_routes, app_router, common_routes};
pub use service::{AdvService, CreateAdv, PatchAdv, RequestValidator, ValidationError};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema};
