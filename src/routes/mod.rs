//! Router assembly: common routes, advertisement routes, and the HTTP layers.

mod adv;
mod common;
pub use adv::adv_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application router. Request bodies above `body_limit` bytes fail body
/// extraction and answer 413 with the usual `{"error": ...}` body.
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(adv_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}
