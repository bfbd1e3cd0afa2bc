//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    category_handler, dashboard_handler, home_handler, shorten_form_handler,
    shorten_submit_handler, stats_handler,
};
use axum::{Router, routing::get};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET  /`                - Landing page
/// - `GET  /shorten`         - Shortener form
/// - `POST /shorten`         - Create a short link
/// - `GET  /stats/{alias}`   - Click statistics of an alias
/// - `GET  /dashboard`       - Category list
/// - `GET  /category/{id}`   - Links of one category
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route(
            "/shorten",
            get(shorten_form_handler).post(shorten_submit_handler),
        )
        .route("/stats/{alias}", get(stats_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/category/{id}", get(category_handler))
}
