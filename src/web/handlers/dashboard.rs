//! Organizer dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::Category;
use crate::state::AppState;
use crate::web::error::PageError;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with:
/// - Every category, ordered by name
/// - Controls to add, rename and delete categories
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    categories: Vec<Category>,
}

/// Renders the organizer dashboard.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PageError> {
    let categories = state.category_service.list_categories().await?;

    Ok(DashboardTemplate { categories })
}
