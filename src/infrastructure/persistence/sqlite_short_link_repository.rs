//! SQLite implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct ShortLinkRow {
    id: i64,
    original_url: String,
    short_alias: String,
    click_count: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(r: ShortLinkRow) -> Self {
        ShortLink::new(r.id, r.original_url, r.short_alias, r.click_count, r.created_at)
    }
}

/// SQLite repository for short links.
///
/// Alias uniqueness is enforced by the `UNIQUE` constraint on
/// `short_links.short_alias`; a violation surfaces as [`AppError::Conflict`].
pub struct SqliteShortLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for SqliteShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (original_url, short_alias, click_count, created_at)
            VALUES (?, ?, 0, ?)
            RETURNING id, original_url, short_alias, click_count, created_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_alias)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_alias, click_count, created_at
            FROM short_links
            WHERE short_alias = ?
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_clicks(&self, alias: &str) -> Result<Option<ShortLink>, AppError> {
        // Single statement: concurrent redirects cannot lose increments.
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            UPDATE short_links
            SET click_count = click_count + 1
            WHERE short_alias = ?
            RETURNING id, original_url, short_alias, click_count, created_at
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
