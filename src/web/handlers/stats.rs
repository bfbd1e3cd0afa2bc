//! Short link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
};

use crate::domain::entities::ShortLink;
use crate::state::AppState;
use crate::utils::base_url::{public_base_url, short_url};
use crate::web::error::PageError;

/// Template for the statistics page.
///
/// Renders `templates/stats.html` with:
/// - Original URL and full short URL
/// - Click count and creation time
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
struct StatsTemplate {
    link: ShortLink,
    short_url: String,
}

/// Renders the statistics page for an alias.
///
/// Viewing stats never changes the click count.
///
/// # Endpoint
///
/// `GET /stats/{alias}`
///
/// # Errors
///
/// Returns the 404 page if the alias doesn't exist.
pub async fn stats_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, PageError> {
    let link = state.short_link_service.get_stats(&alias).await?;

    let base = public_base_url(state.base_url.as_deref(), &headers);
    let short_url = short_url(&base, &link.short_alias);

    Ok(StatsTemplate { link, short_url })
}
