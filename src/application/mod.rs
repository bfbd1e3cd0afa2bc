//! Application layer services implementing business logic.
//!
//! Services consume repository traits (injected as `Arc<R>`) and apply the
//! validation and business rules before any mutation reaches the store.
//!
//! # Available Services
//!
//! - [`services::short_link_service::ShortLinkService`] - Alias allocation and redirect resolution
//! - [`services::category_service::CategoryService`] - Organizer category CRUD
//! - [`services::link_service::LinkService`] - Organizer link CRUD and restore
//! - [`services::export_service::ExportService`] - Spreadsheet export of a category

pub mod services;
