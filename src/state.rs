//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{CategoryService, ExportService, LinkService, ShortLinkService};
use crate::config::ShortenerSettings;
use crate::infrastructure::persistence::{
    SqliteCategoryRepository, SqliteLinkRepository, SqliteShortLinkRepository,
};

/// Services wired to the SQLite repositories, plus request-time settings.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<SqlitePool>,
    pub short_link_service: Arc<ShortLinkService<SqliteShortLinkRepository>>,
    pub category_service: Arc<CategoryService<SqliteCategoryRepository>>,
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub export_service: Arc<ExportService<SqliteCategoryRepository, SqliteLinkRepository>>,
    /// Configured public base for short URLs. `None` means use the request host.
    pub base_url: Option<String>,
}

impl AppState {
    /// Builds repositories and services over a single connection pool.
    pub fn new(pool: Arc<SqlitePool>, settings: &ShortenerSettings) -> Self {
        let short_link_repository = Arc::new(SqliteShortLinkRepository::new(pool.clone()));
        let category_repository = Arc::new(SqliteCategoryRepository::new(pool.clone()));
        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));

        Self {
            short_link_service: Arc::new(ShortLinkService::new(short_link_repository, settings)),
            category_service: Arc::new(CategoryService::new(category_repository.clone())),
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            export_service: Arc::new(ExportService::new(category_repository, link_repository)),
            base_url: settings.base_url.clone(),
            pool,
        }
    }
}
