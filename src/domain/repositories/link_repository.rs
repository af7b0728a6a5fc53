//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short id → URL mappings.
///
/// Backends are interchangeable and selected at startup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - [`crate::infrastructure::persistence::FileLinkRepository`] - single JSON file
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short id is already taken. An
    /// existing mapping is never overwritten.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a mapping by its short id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, short_id: &str) -> Result<Option<Link>, AppError>;

    /// Atomically adds one to the click counter.
    ///
    /// Returns the updated mapping, or `Ok(None)` if the short id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_clicks(&self, short_id: &str) -> Result<Option<Link>, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Short label identifying the backend (`memory`, `file`, `postgres`).
    fn backend_name(&self) -> &'static str;
}
