//! DTOs for organizer links.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::link_service::MISSING_FIELDS;
use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;

/// Link as listed by `GET /api/links/{category_id}`.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub label: String,
    pub url: String,
    pub category_id: i64,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            label: link.label,
            url: link.url,
            category_id: link.category_id,
        }
    }
}

/// Body of `POST /api/add_link` and `POST /api/undo_link`.
///
/// Every field is optional at the parsing stage so a missing one is
/// reported as `Missing fields` instead of a deserialization failure.
///
/// # Example
///
/// ```json
/// {
///   "category_id": 1,
///   "label": "Rust docs",
///   "url": "https://doc.rust-lang.org"
/// }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct LinkRequest {
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<i64>,

    #[serde(default)]
    #[validate(length(max = 200, message = "Label must be at most 200 characters"))]
    pub label: Option<String>,

    #[serde(default)]
    #[validate(length(max = 500, message = "URL must be at most 500 characters"))]
    pub url: Option<String>,
}

impl LinkRequest {
    /// Validates the request and converts it into a [`NewLink`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is absent or too long.
    pub fn into_new_link(self) -> Result<NewLink, AppError> {
        self.validate()?;

        let (Some(category_id), Some(label), Some(url)) = (self.category_id, self.label, self.url)
        else {
            return Err(AppError::bad_request(MISSING_FIELDS));
        };

        Ok(NewLink {
            category_id,
            label,
            url,
        })
    }
}
