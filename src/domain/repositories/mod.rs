//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the SQLite repositories in
//! `crate::infrastructure::persistence`. Services receive them as injected
//! `Arc<R>` handles, so tests can swap in the `mockall` mocks generated under
//! `cfg(test)`.
//!
//! # Available Repositories
//!
//! - [`ShortLinkRepository`] - Alias storage and click counting
//! - [`CategoryRepository`] - Organizer categories
//! - [`LinkRepository`] - Organizer links
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod category_repository;
pub mod link_repository;
pub mod short_link_repository;

pub use category_repository::CategoryRepository;
pub use link_repository::LinkRepository;
pub use short_link_repository::ShortLinkRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
