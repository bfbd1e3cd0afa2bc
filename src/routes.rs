//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Landing page
//! - `GET  /{alias}`        - Short link redirect
//! - `GET  /health`         - Health check
//! - `/shorten`, `/stats/*`, `/dashboard`, `/category/*` - HTML pages
//! - `/api/*`               - Organizer JSON API
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the routing tree with state and tracing applied.
///
/// Static page routes take precedence over the `/{alias}` catch-all, which
/// is why the reserved aliases cannot be used as custom aliases.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::organizer_routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
