//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are bound at runtime and decoded into private `FromRow` structs, which are
//! then converted into domain entities.
//!
//! # Repositories
//!
//! - [`SqliteShortLinkRepository`] - Alias storage and atomic click counting
//! - [`SqliteCategoryRepository`] - Category storage with cascading delete
//! - [`SqliteLinkRepository`] - Organizer link storage

pub mod sqlite_category_repository;
pub mod sqlite_link_repository;
pub mod sqlite_short_link_repository;

pub use sqlite_category_repository::SqliteCategoryRepository;
pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_short_link_repository::SqliteShortLinkRepository;
