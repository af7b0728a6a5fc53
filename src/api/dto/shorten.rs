//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// `url` is optional at the type level so a missing field is reported as a
/// validation error (400) rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(
        required(message = "URL is required"),
        length(max = 2048, message = "URL is too long")
    )]
    pub url: Option<String>,
}

/// Created mapping as returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub short_id: String,
    pub created_at: DateTime<Utc>,
}

impl ShortenResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            original_url: link.original_url,
            short_url,
            short_id: link.short_id,
            created_at: link.created_at,
        }
    }
}
