//! Application error type shared by services, repositories and handlers.
//!
//! Every failure is classified into one of four kinds. JSON endpoints render
//! the error as `{"error": "<message>"}` with the matching status code; page
//! handlers wrap it in [`crate::web::error::PageError`] instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// JSON body returned for failed API requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field is missing or malformed.
    #[error("{message}")]
    Validation { message: String },

    /// The referenced alias, category or link does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// A uniqueness rule was violated (alias or category name taken).
    #[error("{message}")]
    Conflict { message: String },

    /// Store or runtime failure not caused by the request.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    ///
    /// Conflicts are rejected with `400 Bad Request`, the same way the
    /// organizer API reports duplicate category names.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true for errors the user can fix by changing the input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Validation { .. } | AppError::Conflict { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => return AppError::not_found("Record not found"),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                return AppError::conflict("Unique constraint violation");
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                return AppError::not_found("Referenced record not found");
            }
            _ => {}
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid input".to_string());

        AppError::bad_request(message)
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        tracing::error!(error = %e, "Spreadsheet export failed");
        AppError::internal("Failed to build spreadsheet")
    }
}
