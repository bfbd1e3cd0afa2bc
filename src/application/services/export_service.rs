//! Spreadsheet export of a category's links.

use crate::domain::repositories::{CategoryRepository, LinkRepository};
use crate::error::AppError;
use crate::infrastructure::spreadsheet::write_links_workbook;
use std::sync::Arc;

/// A rendered `.xlsx` file ready to be sent as an attachment.
#[derive(Debug)]
pub struct CategoryExport {
    pub filename: String,
    pub content: Vec<u8>,
}

pub struct ExportService<C: CategoryRepository, L: LinkRepository> {
    categories: Arc<C>,
    links: Arc<L>,
}

impl<C, L> ExportService<C, L>
where
    C: CategoryRepository,
    L: LinkRepository,
{
    pub fn new(categories: Arc<C>, links: Arc<L>) -> Self {
        Self { categories, links }
    }

    /// Builds a workbook with every link of the category.
    ///
    /// The file is named `<category name>_links.xlsx` with spaces replaced by
    /// underscores. A category without links still yields the header row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] if the store or the workbook writer fails.
    pub async fn export_category_links(&self, category_id: i64) -> Result<CategoryExport, AppError> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        let links = self.links.list_by_category(category_id).await?;
        let content = write_links_workbook(&category.name, &links)?;

        tracing::info!(
            category_id,
            links = links.len(),
            bytes = content.len(),
            "Category exported"
        );

        Ok(CategoryExport {
            filename: category.export_file_name(),
            content,
        })
    }
}
