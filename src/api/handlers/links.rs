//! Handlers for organizer link endpoints (list, add, delete, undo).

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::{LinkItem, LinkRequest};
use crate::api::dto::message::{CreatedResponse, MessageResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the links of a category.
///
/// # Endpoint
///
/// `GET /api/links/{category_id}`
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "label": "Docs", "url": "https://docs.rs", "category_id": 1 }
/// ]
/// ```
///
/// An unknown category id returns an empty array.
pub async fn list_links_handler(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let links = state.link_service.list_links(category_id).await?;

    Ok(Json(links.into_iter().map(LinkItem::from).collect()))
}

/// Adds a link to a category.
///
/// # Endpoint
///
/// `POST /api/add_link`
///
/// # Request Body
///
/// ```json
/// { "category_id": 1, "label": "Docs", "url": "https://docs.rs" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field is missing.
/// Returns 404 Not Found if the category doesn't exist.
pub async fn add_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<LinkRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let link = state.link_service.add_link(payload.into_new_link()?).await?;

    Ok(Json(CreatedResponse {
        message: "Link added successfully".to_string(),
        id: link.id,
    }))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/delete_link/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete_link(id).await?;

    Ok(Json(MessageResponse::new("Link deleted successfully")))
}

/// Re-creates a link the client deleted moments ago.
///
/// # Endpoint
///
/// `POST /api/undo_link`
///
/// Takes the same body as [`add_link_handler`]. The restored link gets a new
/// id, which is returned so the client can keep working with it.
pub async fn undo_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<LinkRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let link = state
        .link_service
        .restore_link(payload.into_new_link()?)
        .await?;

    Ok(Json(CreatedResponse {
        message: "Link restored successfully".to_string(),
        id: link.id,
    }))
}
