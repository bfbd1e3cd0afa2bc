//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::state::AppState;
use crate::web::error::PageError;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Request Flow
///
/// 1. Atomically increment the alias' click counter
/// 2. Return 302 Found pointing at the original URL
///
/// An unknown alias changes nothing and renders the 404 page.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PageError> {
    let link = state.short_link_service.resolve(&alias).await?;

    tracing::debug!(alias = %link.short_alias, clicks = link.click_count, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]))
}
