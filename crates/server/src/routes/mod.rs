pub mod assistant;
pub mod health;
pub mod metrics;

use axum::{Router, extract::DefaultBodyLimit, routing::post};

/// Largest accepted request body; the context can hold a whole patient list
const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Build API routes
pub fn api_routes() -> Router {
    Router::new()
        .route("/assistant", post(assistant::assist))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
