//! Handler for spreadsheet export of a category.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::AppError;
use crate::infrastructure::spreadsheet::XLSX_CONTENT_TYPE;
use crate::state::AppState;

/// Downloads every link of a category as an `.xlsx` workbook.
///
/// # Endpoint
///
/// `GET /api/export_links/{category_id}`
///
/// # Response Headers
///
/// ```text
/// Content-Type: application/vnd.openxmlformats-officedocument.spreadsheetml.sheet
/// Content-Disposition: attachment; filename="Work_links.xlsx"; filename*=UTF-8''Work_links.xlsx
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the category doesn't exist.
pub async fn export_links_handler(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let export = state
        .export_service
        .export_category_links(category_id)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&export.filename),
            ),
        ],
        export.content,
    ))
}

/// Bytes escaped in an RFC 5987 `ext-value`: everything but `attr-char`.
const ATTR_CHAR_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Builds an attachment header that survives non-ASCII category names.
///
/// `filename` carries an ASCII fallback, `filename*` the exact UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded = utf8_percent_encode(filename, ATTR_CHAR_ESCAPES);

    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
