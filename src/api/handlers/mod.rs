//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod categories;
pub mod export;
pub mod health;
pub mod links;
pub mod redirect;

pub use categories::{add_category_handler, delete_category_handler, edit_category_handler};
pub use export::export_links_handler;
pub use health::health_handler;
pub use links::{add_link_handler, delete_link_handler, list_links_handler, undo_link_handler};
pub use redirect::redirect_handler;
