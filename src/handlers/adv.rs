//! Advertisement handlers: read, create, update, delete.
//!
//! Each handler receives its own [`UnitOfWork`]; writes commit before the
//! response is built, and any early return drops (rolls back) the unit of work.

use crate::error::AppError;
use crate::extractors::{AdvId, UnitOfWork};
use crate::response::{created_id, ok_id};
use crate::service::{AdvService, RequestValidator};
use axum::{body::Bytes, extract::rejection::BytesRejection, response::IntoResponse, Json};
use serde_json::{Map, Value};

/// Parse the raw body as a JSON object whatever the declared content type.
fn body_to_map(payload: Result<Bytes, BytesRejection>) -> Result<Map<String, Value>, AppError> {
    let bytes = payload?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?;
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn read(
    AdvId(id): AdvId,
    mut uow: UnitOfWork,
) -> Result<impl IntoResponse, AppError> {
    let adv = AdvService::get(uow.conn().await?, id).await?;
    Ok(Json(adv))
}

pub async fn create(
    mut uow: UnitOfWork,
    payload: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(payload)?;
    let input = RequestValidator::validate_create(&body)?;
    let adv = AdvService::create(uow.conn().await?, &input).await?;
    uow.commit().await?;
    tracing::info!(id = adv.id, "adv created");
    Ok(created_id(adv.id))
}

pub async fn update(
    AdvId(id): AdvId,
    mut uow: UnitOfWork,
    payload: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(payload)?;
    let patch = RequestValidator::validate_patch(&body)?;
    let adv = AdvService::update(uow.conn().await?, id, patch).await?;
    uow.commit().await?;
    tracing::info!(id = adv.id, "adv updated");
    Ok(ok_id(adv.id))
}

pub async fn delete(
    AdvId(id): AdvId,
    mut uow: UnitOfWork,
) -> Result<impl IntoResponse, AppError> {
    let adv = AdvService::delete(uow.conn().await?, id).await?;
    uow.commit().await?;
    tracing::info!(id = adv.id, "adv deleted");
    Ok(ok_id(adv.id))
}
