//! API route configuration for the link organizer.

use crate::api::handlers::{
    add_category_handler, add_link_handler, delete_category_handler, delete_link_handler,
    edit_category_handler, export_links_handler, list_links_handler, undo_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Organizer JSON routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /links/{category_id}`         - Links of a category
/// - `POST   /add_link`                    - Add a link
/// - `DELETE /delete_link/{id}`            - Delete a link
/// - `POST   /undo_link`                   - Re-create a deleted link
/// - `POST   /add_category`                - Create a category
/// - `PUT    /edit_category/{id}`          - Rename a category
/// - `DELETE /delete_category/{id}`        - Delete a category and its links
/// - `GET    /export_links/{category_id}`  - Download links as `.xlsx`
pub fn organizer_routes() -> Router<AppState> {
    Router::new()
        .route("/links/{category_id}", get(list_links_handler))
        .route("/add_link", post(add_link_handler))
        .route("/delete_link/{id}", delete(delete_link_handler))
        .route("/undo_link", post(undo_link_handler))
        .route("/add_category", post(add_category_handler))
        .route("/edit_category/{id}", put(edit_category_handler))
        .route("/delete_category/{id}", delete(delete_category_handler))
        .route("/export_links/{category_id}", get(export_links_handler))
}
