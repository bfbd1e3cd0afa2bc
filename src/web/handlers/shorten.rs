//! Shortener form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{public_base_url, short_url};
use crate::web::error::PageError;
use crate::web::flash;

/// Template for the shortener form.
///
/// Shows a pending flash message above the form and, after a successful
/// submission, the full short URL.
#[derive(Template, WebTemplate)]
#[template(path = "shorten.html")]
struct ShortenTemplate {
    flash: Option<String>,
    short_url: Option<String>,
}

/// Fields posted by the shortener form.
///
/// An empty `custom_alias` asks for a generated one.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter a URL to shorten"))]
    pub original_url: String,

    #[serde(default)]
    pub custom_alias: Option<String>,
}

/// Renders the shortener form.
///
/// # Endpoint
///
/// `GET /shorten`
///
/// A pending flash message is shown once and its cookie cleared.
pub async fn shorten_form_handler(headers: HeaderMap) -> Response {
    let template = ShortenTemplate {
        flash: flash::read(&headers),
        short_url: None,
    };

    if template.flash.is_some() {
        ([(header::SET_COOKIE, flash::clear_cookie())], template).into_response()
    } else {
        template.into_response()
    }
}

/// Creates a short link from the form.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// On success the form is rendered again with the full short URL. Input
/// problems (bad URL, taken or malformed alias) are stored as a flash
/// message and the browser is sent back to `GET /shorten` with 303.
///
/// # Errors
///
/// Store failures render the error page.
pub async fn shorten_submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Result<Response, PageError> {
    let result = match form.validate() {
        Ok(()) => {
            state
                .short_link_service
                .shorten(form.original_url, form.custom_alias)
                .await
        }
        Err(e) => Err(AppError::from(e)),
    };

    let link = match result {
        Ok(link) => link,
        Err(e) if e.is_user_error() => return Ok(redirect_with_flash(&e.to_string())),
        Err(e) => return Err(e.into()),
    };

    let base = public_base_url(state.base_url.as_deref(), &headers);

    Ok(ShortenTemplate {
        flash: None,
        short_url: Some(short_url(&base, &link.short_alias)),
    }
    .into_response())
}

fn redirect_with_flash(message: &str) -> Response {
    (
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, "/shorten".to_string()),
            (header::SET_COOKIE, flash::set_cookie(message)),
        ],
    )
        .into_response()
}
