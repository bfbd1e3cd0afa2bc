//! Validation of URLs submitted for shortening.

use url::Url;

/// Reasons a submitted URL is refused.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Please enter a URL to shorten")]
    Empty,

    #[error("URL is too long (max {0} characters)")]
    TooLong(usize),

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs can be shortened")]
    UnsupportedProtocol,
}

/// Checks that `input` is an absolute HTTP(S) URL of at most `max_length`
/// characters.
///
/// The URL is stored exactly as submitted; nothing is normalized. Rejecting
/// other schemes keeps `javascript:` and `data:` targets out of redirects.
///
/// # Errors
///
/// Returns a [`TargetUrlError`] describing the first failed check.
pub fn validate_target_url(input: &str, max_length: usize) -> Result<(), TargetUrlError> {
    if input.is_empty() {
        return Err(TargetUrlError::Empty);
    }

    if input.chars().count() > max_length {
        return Err(TargetUrlError::TooLong(max_length));
    }

    // Stored verbatim and sent as `Location`; `Url::parse` would skip these.
    if input.chars().any(char::is_control) {
        return Err(TargetUrlError::InvalidFormat(
            "control characters are not allowed".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(TargetUrlError::UnsupportedProtocol),
    }
}
