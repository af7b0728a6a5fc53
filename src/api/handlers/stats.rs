//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full mapping record for a short id, including its click count.
///
/// # Endpoint
///
/// `GET /stats/{short_id}`
///
/// # Response
///
/// ```json
/// {
///   "shortId": "abc123",
///   "originalUrl": "https://example.com",
///   "shortUrl": "rupeek.co/short/abc123",
///   "clicks": 4,
///   "createdAt": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_stats(&short_id).await?;
    let short_url = state.link_service.short_url(&link.short_id);

    Ok(Json(StatsResponse::new(link, short_url)))
}
