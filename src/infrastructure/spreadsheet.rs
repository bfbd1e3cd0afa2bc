//! `.xlsx` rendering for category link exports.
//!
//! Produces a single-sheet workbook with a bold header row
//! (`Label`, `URL`, `Created At`) followed by one row per link.

use rust_xlsxwriter::{Format, Workbook};

use crate::domain::entities::Link;
use crate::error::AppError;

/// MIME type of the generated workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Excel's limit on worksheet name length.
const MAX_SHEET_NAME_LENGTH: usize = 31;

/// Characters Excel forbids in worksheet names.
const FORBIDDEN_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

const HEADERS: [&str; 3] = ["Label", "URL", "Created At"];

/// Renders `links` into an in-memory `.xlsx` file.
///
/// The worksheet is named after `sheet_name`, adjusted with
/// [`sanitize_sheet_name`] so any category name produces a valid workbook.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the workbook cannot be assembled.
pub fn write_links_workbook(sheet_name: &str, links: &[Link]) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sanitize_sheet_name(sheet_name))?;

    for (col, title) in (0u16..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, title, &header_format)?;
    }

    for (row, link) in (1u32..).zip(links) {
        worksheet.write_string(row, 0, &link.label)?;
        worksheet.write_string(row, 1, &link.url)?;
        worksheet.write_datetime_with_format(row, 2, &link.created_at.naive_utc(), &date_format)?;
    }

    worksheet.set_column_width(0, 30)?;
    worksheet.set_column_width(1, 60)?;
    worksheet.set_column_width(2, 20)?;

    Ok(workbook.save_to_buffer()?)
}

/// Turns an arbitrary category name into a valid Excel worksheet name.
///
/// Forbidden characters become `_`, leading and trailing apostrophes are
/// dropped, the result is cut to 31 characters, and names Excel refuses
/// (empty, `History`) are replaced.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if FORBIDDEN_SHEET_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed: String = cleaned
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_LENGTH)
        .collect();
    let trimmed = trimmed.trim_end_matches('\'').to_string();

    if trimmed.trim().is_empty() {
        "Links".to_string()
    } else if trimmed.eq_ignore_ascii_case("history") {
        format!("{trimmed}_")
    } else {
        trimmed
    }
}
