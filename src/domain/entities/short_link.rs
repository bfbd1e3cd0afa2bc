//! Short link entity mapping an alias to its original URL.

use chrono::{DateTime, Utc};

/// An alias that redirects to `original_url`.
///
/// `click_count` only ever grows: the redirect path is the single writer and
/// increments it by one per resolved request.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_alias: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_alias: String,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_alias,
            click_count,
            created_at,
        }
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_alias: String,
}
