//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service endpoints.
///
/// # Endpoints
///
/// - `POST /shorten`            - Create a short link
/// - `GET  /short/{short_id}`   - Redirect to the original URL
/// - `GET  /stats/{short_id}`   - Mapping record with click count
/// - `GET  /health`             - Liveness check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/short/{short_id}", get(redirect_handler))
        .route("/stats/{short_id}", get(stats_handler))
        .route("/health", get(health_handler))
}
