//! Organizer category management service.

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Message returned when a category name is already used.
pub const CATEGORY_EXISTS: &str = "Category already exists";

/// Maximum length of a category name.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Service for managing the categories of the link organizer.
///
/// Handles category CRUD with validation to ensure:
/// - Names are present and unique
/// - Deleting a category removes its links in the same transaction
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a new category service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_category(&self, id: i64) -> Result<Category, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    /// Creates a new category.
    ///
    /// Surrounding whitespace is trimmed from `name` before storing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or too long.
    /// Returns [`AppError::Conflict`] if the name already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_category(&self, name: &str) -> Result<Category, AppError> {
        let name = validate_name(name, "Missing category name")?;

        if self.repository.find_by_name(&name).await?.is_some() {
            return Err(AppError::conflict(CATEGORY_EXISTS));
        }

        let category = self
            .repository
            .create(NewCategory { name })
            .await
            .map_err(duplicate_as_exists)?;

        tracing::info!(id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Renames a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new name is blank or too long.
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Conflict`] if another category already has the name.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn rename_category(&self, id: i64, name: &str) -> Result<Category, AppError> {
        let name = validate_name(name, "Missing new category name")?;

        let category = self
            .repository
            .rename(id, &name)
            .await
            .map_err(duplicate_as_exists)?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        tracing::info!(id = category.id, name = %category.name, "Category renamed");
        Ok(category)
    }

    /// Deletes a category together with all of its links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_category(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete_with_links(id).await? {
            return Err(AppError::not_found("Category not found"));
        }

        tracing::info!(id, "Category and its links deleted");
        Ok(())
    }
}

fn validate_name(name: &str, missing_message: &str) -> Result<String, AppError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(AppError::bad_request(missing_message));
    }

    if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(AppError::bad_request(format!(
            "Category name must be at most {MAX_CATEGORY_NAME_LENGTH} characters"
        )));
    }

    Ok(name.to_string())
}

fn duplicate_as_exists(e: AppError) -> AppError {
    match e {
        AppError::Conflict { .. } => AppError::conflict(CATEGORY_EXISTS),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCategoryRepository;
    use chrono::Utc;

    fn create_test_category(id: i64, name: &str) -> Category {
        Category::new(id, name.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_list_categories() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                create_test_category(2, "Alpha"),
                create_test_category(1, "Beta"),
            ])
        });

        let service = CategoryService::new(Arc::new(mock_repo));
        let categories = service.list_categories().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Alpha");
    }

    #[tokio::test]
    async fn test_create_category_success() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "Work")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|new_category| new_category.name == "Work")
            .times(1)
            .returning(|new_category| Ok(create_test_category(1, &new_category.name)));

        let service = CategoryService::new(Arc::new(mock_repo));
        let category = service.create_category("Work").await.unwrap();

        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Work");
    }

    #[tokio::test]
    async fn test_create_category_trims_name() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "Reading")
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .withf(|new_category| new_category.name == "Reading")
            .times(1)
            .returning(|new_category| Ok(create_test_category(1, &new_category.name)));

        let service = CategoryService::new(Arc::new(mock_repo));

        assert!(service.create_category("  Reading ").await.is_ok());
    }

    #[tokio::test]
    async fn test_create_category_duplicate() {
        let mut mock_repo = MockCategoryRepository::new();

        let existing = create_test_category(1, "Work");
        mock_repo
            .expect_find_by_name()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_create().times(0);

        let service = CategoryService::new(Arc::new(mock_repo));
        let err = service.create_category("Work").await.unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), CATEGORY_EXISTS);
    }

    #[tokio::test]
    async fn test_create_category_insert_race() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .returning(|_| Err(AppError::conflict("Unique constraint violation")));

        let service = CategoryService::new(Arc::new(mock_repo));
        let err = service.create_category("Work").await.unwrap_err();

        assert_eq!(err.to_string(), CATEGORY_EXISTS);
    }

    #[tokio::test]
    async fn test_create_category_blank_name() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(Arc::new(mock_repo));

        let err = service.create_category("   ").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Missing category name");
    }

    #[tokio::test]
    async fn test_create_category_name_too_long() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(Arc::new(mock_repo));

        let name = "n".repeat(MAX_CATEGORY_NAME_LENGTH + 1);
        let err = service.create_category(&name).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_rename_category_success() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_rename()
            .withf(|id, name| *id == 4 && name == "Personal")
            .times(1)
            .returning(|id, name| Ok(Some(create_test_category(id, name))));

        let service = CategoryService::new(Arc::new(mock_repo));
        let category = service.rename_category(4, "Personal").await.unwrap();

        assert_eq!(category.id, 4);
        assert_eq!(category.name, "Personal");
    }

    #[tokio::test]
    async fn test_rename_category_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_rename().returning(|_, _| Ok(None));

        let service = CategoryService::new(Arc::new(mock_repo));
        let err = service.rename_category(99, "Other").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_rename_category_missing_name_checked_first() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_rename().times(0);

        let service = CategoryService::new(Arc::new(mock_repo));
        let err = service.rename_category(99, "").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Missing new category name");
    }

    #[tokio::test]
    async fn test_rename_category_to_existing_name() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_rename()
            .returning(|_, _| Err(AppError::conflict("Unique constraint violation")));

        let service = CategoryService::new(Arc::new(mock_repo));
        let err = service.rename_category(1, "Taken").await.unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), CATEGORY_EXISTS);
    }

    #[tokio::test]
    async fn test_delete_category_success() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_delete_with_links()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(true));

        let service = CategoryService::new(Arc::new(mock_repo));

        assert!(service.delete_category(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_category_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_delete_with_links()
            .returning(|_| Ok(false));

        let service = CategoryService::new(Arc::new(mock_repo));
        let err = service.delete_category(42).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = CategoryService::new(Arc::new(mock_repo));
        let err = service.get_category(7).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
