//! Link creation, resolution and statistics service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, is_valid_code};
use crate::utils::url_validator::{UrlValidationError, validate_url};

const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// Tunables for [`LinkService`].
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Prefix for returned short URLs, e.g. `rupeek.co/short`.
    pub base_url: String,
    /// Length of generated short ids.
    pub code_length: usize,
    /// How many ids to try before giving up with [`AppError::Collision`].
    pub max_code_attempts: usize,
    /// Whether redirects increment the click counter.
    pub track_clicks: bool,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            base_url: "rupeek.co/short".to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            max_code_attempts: 5,
            track_clicks: true,
        }
    }
}

/// Service for creating, resolving and inspecting short links.
///
/// Works against any [`LinkRepository`] backend.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    settings: LinkSettings,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>, settings: LinkSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Name of the storage backend in use.
    pub fn backend_name(&self) -> &'static str {
        self.repository.backend_name()
    }

    /// Number of stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Creates a short link for `long_url`.
    ///
    /// # Code Generation
    ///
    /// A random id is generated and inserted; if the store reports a conflict
    /// a fresh id is tried, up to `max_code_attempts` times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank or not an
    /// absolute HTTP(S) URL.
    ///
    /// Returns [`AppError::Collision`] if every attempt collided.
    pub async fn create_short_link(&self, long_url: &str) -> Result<Link, AppError> {
        let original_url = validate_url(long_url).map_err(|e| match e {
            UrlValidationError::Missing => AppError::bad_request("URL is required"),
            other => AppError::bad_request(other.to_string()),
        })?;

        let attempts = self.settings.max_code_attempts.max(1);

        for attempt in 1..=attempts {
            let code = generate_code(self.settings.code_length);

            match self
                .repository
                .insert(NewLink::new(code.clone(), original_url))
                .await
            {
                Ok(link) => {
                    debug!("Created short link {} -> {}", link.short_id, link.original_url);
                    return Ok(link);
                }
                Err(AppError::Conflict(_)) => {
                    warn!("Short id collision on '{}' (attempt {}/{})", code, attempt, attempts);
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::Collision { attempts })
    }

    /// Resolves a short id for redirecting.
    ///
    /// When click tracking is enabled the counter is incremented before the
    /// mapping is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_id: &str) -> Result<Link, AppError> {
        if !is_valid_code(short_id) {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        let link = if self.settings.track_clicks {
            self.repository.increment_clicks(short_id).await?
        } else {
            self.repository.find_by_code(short_id).await?
        };

        link.ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Retrieves a mapping with its click count, without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_stats(&self, short_id: &str) -> Result<Link, AppError> {
        if !is_valid_code(short_id) {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        self.repository
            .find_by_code(short_id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Constructs the public short URL for a short id.
    pub fn short_url(&self, short_id: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            short_id
        )
    }
}
