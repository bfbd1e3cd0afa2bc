//! Organizer link management service.

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Message returned when a required link field is missing.
pub const MISSING_FIELDS: &str = "Missing fields";

pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists links of a category in insertion order.
    ///
    /// An unknown category yields an empty list.
    pub async fn list_links(&self, category_id: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list_by_category(category_id).await
    }

    /// Adds a link to an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the label or URL is blank.
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = self.insert(new_link).await?;
        tracing::info!(id = link.id, category_id = link.category_id, "Link added");
        Ok(link)
    }

    /// Re-creates a previously deleted link.
    ///
    /// The restored link receives a fresh id and creation timestamp.
    pub async fn restore_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = self.insert(new_link).await?;
        tracing::info!(id = link.id, category_id = link.category_id, "Link restored");
        Ok(link)
    }

    /// Deletes a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the id.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Link not found"));
        }

        tracing::info!(id, "Link deleted");
        Ok(())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let label = new_link.label.trim();
        let url = new_link.url.trim();

        if label.is_empty() || url.is_empty() {
            return Err(AppError::bad_request(MISSING_FIELDS));
        }

        let new_link = NewLink {
            category_id: new_link.category_id,
            label: label.to_string(),
            url: url.to_string(),
        };

        self.repository.create(new_link).await.map_err(|e| match e {
            AppError::NotFound { .. } => AppError::not_found("Category not found"),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn new_link(category_id: i64, label: &str, url: &str) -> NewLink {
        NewLink {
            category_id,
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    fn stored(id: i64, new_link: NewLink) -> Link {
        Link::new(
            id,
            new_link.category_id,
            new_link.label,
            new_link.url,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_add_link_success() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_create()
            .withf(|l| l.category_id == 1 && l.label == "Docs" && l.url == "https://docs.rs")
            .times(1)
            .returning(|l| Ok(stored(10, l)));

        let service = LinkService::new(Arc::new(mock_repo));
        let link = service
            .add_link(new_link(1, "Docs", "https://docs.rs"))
            .await
            .unwrap();

        assert_eq!(link.id, 10);
        assert_eq!(link.label, "Docs");
    }

    #[tokio::test]
    async fn test_add_link_trims_fields() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_create()
            .withf(|l| l.label == "Docs" && l.url == "https://docs.rs")
            .times(1)
            .returning(|l| Ok(stored(1, l)));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(
            service
                .add_link(new_link(1, " Docs ", " https://docs.rs "))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_add_link_missing_fields() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service
            .add_link(new_link(1, "", "https://docs.rs"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);

        let err = service.add_link(new_link(1, "Docs", "  ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_add_link_unknown_category() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(AppError::not_found("Referenced record not found")));

        let service = LinkService::new(Arc::new(mock_repo));
        let err = service
            .add_link(new_link(999, "Docs", "https://docs.rs"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Category not found");
    }

    #[tokio::test]
    async fn test_restore_link_creates_new_row() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|l| Ok(stored(11, l)));

        let service = LinkService::new(Arc::new(mock_repo));
        let link = service
            .restore_link(new_link(1, "Docs", "https://docs.rs"))
            .await
            .unwrap();

        assert_eq!(link.id, 11);
        assert_eq!(link.url, "https://docs.rs");
    }

    #[tokio::test]
    async fn test_delete_link() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(true));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.delete_link(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = LinkService::new(Arc::new(mock_repo));
        let err = service.delete_link(3).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Link not found");
    }

    #[tokio::test]
    async fn test_list_links_unknown_category_is_empty() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_list_by_category()
            .withf(|id| *id == 42)
            .returning(|_| Ok(vec![]));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.list_links(42).await.unwrap().is_empty());
    }
}
