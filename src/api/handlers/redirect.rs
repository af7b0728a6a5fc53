//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /short/{short_id}`
///
/// The click counter is incremented before the redirect is issued (unless
/// click tracking is disabled).
///
/// # Response
///
/// `302 Found` with `Location: <originalUrl>`.
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
/// Returns 500 Internal Server Error on storage failure.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&short_id).await?;

    let location = HeaderValue::from_str(&link.original_url).map_err(|e| {
        AppError::internal(format!(
            "Stored URL for '{}' is not a valid header value: {e}",
            link.short_id
        ))
    })?;

    debug!("Redirecting {} -> {}", link.short_id, link.original_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
