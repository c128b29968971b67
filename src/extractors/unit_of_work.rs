//! One unit of work (a database transaction) per request.
//!
//! The transaction is begun on first store access, so a request rejected before
//! touching the store never takes a pooled connection. Writes call
//! [`UnitOfWork::commit`]; a unit of work dropped without committing (early
//! return, error, read-only request) is rolled back when the transaction is
//! dropped, before its connection goes back to the pool.

use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use std::convert::Infallible;

pub struct UnitOfWork {
    pool: PgPool,
    tx: Option<Transaction<'static, Postgres>>,
}

impl UnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool, tx: None }
    }

    /// Connection of this unit of work, beginning the transaction if needed.
    pub async fn conn(&mut self) -> Result<&mut PgConnection, sqlx::Error> {
        let tx = match self.tx {
            Some(ref mut tx) => tx,
            None => {
                tracing::debug!("begin unit of work");
                self.tx.insert(self.pool.begin().await?)
            }
        };
        Ok(&mut **tx)
    }

    /// Commit pending writes. No-op when the store was never touched.
    pub async fn commit(mut self) -> Result<(), sqlx::Error> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
            tracing::debug!("unit of work committed");
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.tx.is_some()
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        if self.tx.is_some() {
            tracing::debug!("unit of work closed without commit, rolling back");
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for UnitOfWork {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(UnitOfWork::new(state.pool.clone()))
    }
}
