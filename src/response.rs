//! Response body helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;

/// `{"id": ...}` body returned by every mutating operation.
#[derive(Debug, Serialize)]
pub struct IdBody {
    pub id: i32,
}

pub fn created_id(id: i32) -> (StatusCode, Json<IdBody>) {
    (StatusCode::CREATED, Json(IdBody { id }))
}

pub fn ok_id(id: i32) -> (StatusCode, Json<IdBody>) {
    (StatusCode::OK, Json(IdBody { id }))
}

pub fn error_body(message: impl Into<Value>) -> Value {
    serde_json::json!({ "error": message.into() })
}
