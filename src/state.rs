//! Shared application state for all routes.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// Process-wide connection pool. Each request draws its own unit of work from it.
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
