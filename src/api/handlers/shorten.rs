//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "shortUrl": "rupeek.co/short/abc123",
///   "shortId": "abc123",
///   "createdAt": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is missing, or
/// `url` is not an absolute HTTP(S) URL.
/// Returns 500 Internal Server Error on storage failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;
    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let link = state.link_service.create_short_link(&url).await?;
    let short_url = state.link_service.short_url(&link.short_id);

    info!("Shortened {} as {}", link.original_url, short_url);

    Ok(Json(ShortenResponse::new(link, short_url)))
}
