//! Handlers for organizer category endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::category::{CategoryRequest, CategoryResponse};
use crate::api::dto::message::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a category.
///
/// # Endpoint
///
/// `POST /api/add_category`
///
/// # Request Body
///
/// ```json
/// { "name": "Work" }
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Category added successfully", "id": 1, "name": "Work" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the name is missing or already used.
pub async fn add_category_handler(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state
        .category_service
        .create_category(payload.name.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(CategoryResponse::new(
        "Category added successfully",
        category,
    )))
}

/// Renames a category.
///
/// # Endpoint
///
/// `PUT /api/edit_category/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the name is missing or already used.
/// Returns 404 Not Found if the category doesn't exist.
pub async fn edit_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state
        .category_service
        .rename_category(id, payload.name.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(CategoryResponse::new(
        "Category updated successfully",
        category,
    )))
}

/// Deletes a category and every link in it.
///
/// # Endpoint
///
/// `DELETE /api/delete_category/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the category doesn't exist.
pub async fn delete_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.category_service.delete_category(id).await?;

    Ok(Json(MessageResponse::new(
        "Category and its links deleted successfully",
    )))
}
