//! Alias allocation and redirect resolution service.

use std::sync::Arc;

use crate::config::ShortenerSettings;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{generate_alias, validate_custom_alias};
use crate::utils::target_url::validate_target_url;

/// Message shown when the requested (or generated) alias is already stored.
pub const ALIAS_TAKEN: &str = "Alias already taken! Try another.";

/// Service for creating short links and resolving them on redirect.
///
/// Owns the alias allocation rules: a non-blank custom alias is trimmed and
/// checked with [`validate_custom_alias`], otherwise a random alias is
/// generated. An alias that already exists is rejected outright. Random
/// aliases are not regenerated on collision.
pub struct ShortLinkService<R: ShortLinkRepository> {
    repository: Arc<R>,
    alias_length: usize,
    max_url_length: usize,
}

impl<R: ShortLinkRepository> ShortLinkService<R> {
    /// Creates a new short link service.
    pub fn new(repository: Arc<R>, settings: &ShortenerSettings) -> Self {
        Self {
            repository,
            alias_length: settings.alias_length,
            max_url_length: settings.max_url_length,
        }
    }

    /// Creates a short link for `original_url`.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The URL to redirect to (absolute HTTP/HTTPS)
    /// - `custom_alias` - Optional alias, trimmed; `None` or a blank string
    ///   means a random alias is generated
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom alias is invalid.
    /// Returns [`AppError::Conflict`] if the alias already exists, including
    /// when a concurrent request inserts it first.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn shorten(
        &self,
        original_url: String,
        custom_alias: Option<String>,
    ) -> Result<ShortLink, AppError> {
        let original_url = original_url.trim().to_string();
        validate_target_url(&original_url, self.max_url_length)
            .map_err(|e| AppError::bad_request(e.to_string()))?;

        let custom_alias = custom_alias
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        let alias = match custom_alias {
            Some(custom) => {
                validate_custom_alias(&custom)?;
                custom
            }
            None => generate_alias(self.alias_length),
        };

        if self.repository.find_by_alias(&alias).await?.is_some() {
            tracing::debug!(alias = %alias, "Alias rejected, already in use");
            return Err(AppError::conflict(ALIAS_TAKEN));
        }

        let new_link = NewShortLink {
            original_url,
            short_alias: alias,
        };

        match self.repository.create(new_link).await {
            Ok(link) => {
                tracing::info!(alias = %link.short_alias, id = link.id, "Short link created");
                Ok(link)
            }
            Err(AppError::Conflict { .. }) => Err(AppError::conflict(ALIAS_TAKEN)),
            Err(e) => Err(e),
        }
    }

    /// Resolves an alias for redirection, counting the click.
    ///
    /// The counter is incremented by exactly one in the same statement that
    /// looks the alias up.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this alias; nothing is
    /// modified in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, alias: &str) -> Result<ShortLink, AppError> {
        self.repository
            .increment_clicks(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }

    /// Retrieves a short link for its statistics page without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this alias.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_stats(&self, alias: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }
}
