//! Browser-facing pages.
//!
//! Server-side rendered with Askama templates. The organizer pages call the
//! JSON API from `static/js/organizer.js`.
//!
//! # Modules
//!
//! - [`error`] - HTML error page for failed page requests
//! - [`flash`] - One-shot messages carried in a cookie
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod error;
pub mod flash;
pub mod handlers;
pub mod routes;
