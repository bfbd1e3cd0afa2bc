//! # Linkboard
//!
//! A URL shortener with click counting, combined with a categorized link
//! organizer, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage and spreadsheet export
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware for the organizer
//! - **Web Layer** ([`web`]) - HTML pages for shortening, stats, and browsing
//!
//! ## Features
//!
//! - Random or custom aliases with a 302 redirect and atomic click counting
//! - Categories of labeled links with add, rename, delete, and undo
//! - `.xlsx` export of a category's links
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://linkboard.db?mode=rwc"  # Optional
//!
//! # Migrations run automatically on startup
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CategoryService, ExportService, LinkService, ShortLinkService,
    };
    pub use crate::domain::entities::{Category, Link, NewLink, ShortLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
