//! DTOs for organizer categories.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Category;

/// Body of `POST /api/add_category` and `PUT /api/edit_category/{id}`.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Category returned after it was created or renamed.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub message: String,
    pub id: i64,
    pub name: String,
}

impl CategoryResponse {
    pub fn new(message: impl Into<String>, category: Category) -> Self {
        Self {
            message: message.into(),
            id: category.id,
            name: category.name,
        }
    }
}
