//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for alias-to-URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteShortLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts a new short link with `click_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias already exists. The store's
    /// UNIQUE constraint is the authority here, so this also covers two
    /// requests racing past the service-level existence check.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a short link by its alias (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the click counter of `alias` by one.
    ///
    /// Returns the link with its updated counter, or `Ok(None)` when no link
    /// has that alias (nothing is written in that case).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, alias: &str) -> Result<Option<ShortLink>, AppError>;
}
