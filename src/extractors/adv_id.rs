//! Extract the advertisement id from the `:adv_id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Path id of an advertisement. Only plain ASCII digits match; anything else
/// (signs, letters, values past the id column range) is treated as no such route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvId(pub i32);

pub fn parse_adv_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[async_trait]
impl<S> FromRequestParts<S> for AdvId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("adv"))?;
        parse_adv_id(&raw).map(AdvId).ok_or(AppError::NotFound("adv"))
    }
}
