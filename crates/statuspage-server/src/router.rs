//! Axum router wiring.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, ops, views};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(views::index))
        .route("/health", get(ops::health))
        .route("/info", get(ops::info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
