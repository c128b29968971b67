//! Advertisement routes. `/adv/` takes creates; `/adv/:adv_id` serves the id-scoped operations.

use crate::handlers::adv::{create, delete as delete_handler, read, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn adv_routes(state: AppState) -> Router {
    Router::new()
        .route("/adv/", post(create))
        .route(
            "/adv/:adv_id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
