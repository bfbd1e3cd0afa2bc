//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Links to the shortener form and the organizer dashboard.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
struct HomeTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
