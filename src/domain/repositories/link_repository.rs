//! Repository trait for organizer links.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for links stored in categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a link with a fresh id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `category_id` does not reference an
    /// existing category (foreign key violation).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Lists the links of a category in insertion order.
    ///
    /// An unknown category yields an empty list.
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Link>, AppError>;

    /// Deletes a link. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
