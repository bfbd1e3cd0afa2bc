//! Repository trait for organizer categories.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCategoryRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Creates a new category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already used.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Finds a category by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// Finds a category by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError>;

    /// Lists all categories ordered by name ascending.
    async fn list(&self) -> Result<Vec<Category>, AppError>;

    /// Renames a category.
    ///
    /// Returns `Ok(None)` if no category has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another category already has `name`.
    async fn rename(&self, id: i64, name: &str) -> Result<Option<Category>, AppError>;

    /// Deletes a category and all of its links in one transaction.
    ///
    /// Links are removed explicitly before the category even though the
    /// foreign key also cascades. Returns `Ok(false)` if the category does
    /// not exist.
    async fn delete_with_links(&self, id: i64) -> Result<bool, AppError>;
}
