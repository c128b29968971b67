//! Single-row CRUD on the advertisements table.
//!
//! Every call runs on the request's connection (see [`crate::extractors::UnitOfWork`]);
//! committing is the caller's job. Update and delete fetch the row first so
//! all id-scoped operations share one not-found path.

use crate::error::AppError;
use crate::model::Advertisement;
use crate::service::{CreateAdv, PatchAdv};
use crate::sql;
use sqlx::PgConnection;

pub struct AdvService;

impl AdvService {
    /// Fetch one advertisement by id.
    pub async fn get(conn: &mut PgConnection, id: i32) -> Result<Advertisement, AppError> {
        let q = sql::select_by_id();
        tracing::debug!(sql = %q, id, "query");
        sqlx::query_as::<_, Advertisement>(&q)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(AppError::NotFound("adv"))
    }

    /// Insert a new advertisement. The store assigns `id` and `created_at`.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateAdv,
    ) -> Result<Advertisement, AppError> {
        let q = sql::insert();
        tracing::debug!(sql = %q, "query");
        let adv = sqlx::query_as::<_, Advertisement>(&q)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.author)
            .fetch_one(&mut *conn)
            .await?;
        Ok(adv)
    }

    /// Apply a patch to an existing advertisement and persist it.
    pub async fn update(
        conn: &mut PgConnection,
        id: i32,
        patch: PatchAdv,
    ) -> Result<Advertisement, AppError> {
        let mut adv = Self::get(conn, id).await?;
        if patch.is_empty() {
            return Ok(adv);
        }
        adv.apply(patch);
        let q = sql::update();
        tracing::debug!(sql = %q, id, "query");
        let adv = sqlx::query_as::<_, Advertisement>(&q)
            .bind(adv.id)
            .bind(&adv.title)
            .bind(&adv.description)
            .bind(&adv.author)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(AppError::NotFound("adv"))?;
        Ok(adv)
    }

    /// Remove an advertisement. Returns the row as it was before deletion.
    pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<Advertisement, AppError> {
        let adv = Self::get(conn, id).await?;
        let q = sql::delete();
        tracing::debug!(sql = %q, id, "query");
        sqlx::query(&q).bind(adv.id).execute(&mut *conn).await?;
        Ok(adv)
    }
}
