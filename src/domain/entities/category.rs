//! Category entity grouping organizer links.

use chrono::{DateTime, Utc};

/// A uniquely named bucket of [`super::Link`]s.
///
/// Removing a category removes every link inside it.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new Category instance.
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    /// File name used when the category's links are exported.
    ///
    /// Spaces are replaced with underscores: `"Work Stuff"` becomes
    /// `"Work_Stuff_links.xlsx"`.
    pub fn export_file_name(&self) -> String {
        format!("{}_links.xlsx", self.name.replace(' ', "_"))
    }
}

/// Input data for creating a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
}
