//! Organizer link entity.

use chrono::{DateTime, Utc};

/// A labelled URL stored in a category.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub category_id: i64,
    pub label: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        category_id: i64,
        label: String,
        url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            category_id,
            label,
            url,
            created_at,
        }
    }
}

/// Input data for creating (or re-creating) a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub category_id: i64,
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            7,
            2,
            "Rust Book".to_string(),
            "https://doc.rust-lang.org/book/".to_string(),
            now,
        );

        assert_eq!(link.id, 7);
        assert_eq!(link.category_id, 2);
        assert_eq!(link.label, "Rust Book");
        assert_eq!(link.url, "https://doc.rust-lang.org/book/");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            category_id: 1,
            label: "Docs".to_string(),
            url: "https://docs.rs".to_string(),
        };

        assert_eq!(new_link.category_id, 1);
        assert_eq!(new_link.label, "Docs");
    }
}
