//! Category page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::domain::entities::{Category, Link};
use crate::state::AppState;
use crate::web::error::PageError;

#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
struct CategoryTemplate {
    category: Category,
    links: Vec<Link>,
}

/// Renders one category with its links.
///
/// # Endpoint
///
/// `GET /category/{id}`
///
/// Adding, deleting, undoing and exporting are driven from the page by
/// `static/js/organizer.js` against the `/api` endpoints.
///
/// # Errors
///
/// Returns the 404 page if the category doesn't exist.
pub async fn category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PageError> {
    let category = state.category_service.get_category(id).await?;
    let links = state.link_service.list_links(id).await?;

    Ok(CategoryTemplate { category, links })
}
