//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`           - Create a short link
//! - `GET  /short/{short_id}`  - Redirect to the original URL
//! - `GET  /stats/{short_id}`  - Mapping record with click count
//! - `GET  /health`            - Liveness check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes with state and tracing applied, without path normalization.
pub fn router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{LinkService, LinkSettings};
    use crate::infrastructure::persistence::InMemoryLinkRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(Arc::new(LinkService::new(
            Arc::new(InMemoryLinkRepository::new()),
            LinkSettings::default(),
        )))
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let request = Request::builder()
            .uri("/health/")
            .body(Body::empty())
            .unwrap();

        let response = app_router(state()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_short_id_is_404() {
        let request = Request::builder()
            .uri("/short/abc123")
            .body(Body::empty())
            .unwrap();

        let response = app_router(state()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
