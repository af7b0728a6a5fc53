//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Full mapping record including its click count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_id: String,
    pub original_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl StatsResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            short_id: link.short_id,
            original_url: link.original_url,
            short_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}
