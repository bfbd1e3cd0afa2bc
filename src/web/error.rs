//! HTML rendering of [`AppError`] for page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    reason: &'static str,
    message: String,
}

/// An [`AppError`] raised while serving an HTML page.
///
/// Renders `templates/error.html` with the status code of the underlying
/// error instead of the JSON body used by the API.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();

        let template = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: self.0.to_string(),
        };

        (status, template).into_response()
    }
}
