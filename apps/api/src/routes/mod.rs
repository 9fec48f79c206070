pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::state::AppState;
use crate::workflow::handlers;

/// Resume uploads are small; 10 MiB leaves generous headroom over axum's
/// 2 MiB default without inviting abuse.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_index).post(handlers::handle_intake))
        .route(
            "/preview",
            get(handlers::handle_preview).post(handlers::handle_send),
        )
        .route("/success", get(handlers::handle_success))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
