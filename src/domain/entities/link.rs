//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping with its metadata.
///
/// The public short URL is not stored; it is derived from the configured
/// base URL by [`crate::application::services::LinkService::short_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        short_id: String,
        original_url: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
            clicks,
        }
    }

    /// Builds a freshly created link from its creation input.
    pub fn from_new(new_link: NewLink, created_at: DateTime<Utc>) -> Self {
        Self::new(new_link.short_id, new_link.original_url, created_at, 0)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_id: String,
    pub original_url: String,
}

impl NewLink {
    pub fn new(short_id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            original_url: original_url.into(),
        }
    }
}
