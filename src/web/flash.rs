//! One-shot flash messages carried in a cookie.
//!
//! A handler that redirects after a failed form submission stores the
//! message with [`set_cookie`]; the next page render reads it with
//! [`read`] and clears it with [`clear_cookie`].

use axum::http::{HeaderMap, header::COOKIE};
use url::form_urlencoded;

/// Name of the cookie holding the pending message.
pub const FLASH_COOKIE: &str = "flash";

/// `Set-Cookie` value storing `message` until the next page view.
pub fn set_cookie(message: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("{FLASH_COOKIE}={encoded}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value removing the flash cookie.
pub fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Returns the pending flash message, if any.
///
/// Handles multiple cookies in the `Cookie` header by splitting on
/// semicolons and ignoring everything but `flash`.
pub fn read(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(FLASH_COOKIE), Some(value)) if !value.is_empty() => Some(decode(value)),
                _ => None,
            }
        })
}

fn decode(value: &str) -> String {
    form_urlencoded::parse(format!("m={value}").as_bytes())
        .map(|(_, v)| v.into_owned())
        .next()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_set_cookie_encodes_message() {
        let cookie = set_cookie("Alias already taken! Try another.");

        assert!(cookie.starts_with("flash=Alias+already+taken%21+Try+another."));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_read_decodes_message() {
        let cookie = set_cookie("Please enter a URL to shorten");
        let value = cookie.split(';').next().unwrap();

        let headers = headers_with_cookie(&format!("theme=dark; {value}"));

        assert_eq!(
            read(&headers).as_deref(),
            Some("Please enter a URL to shorten")
        );
    }

    #[test]
    fn test_read_without_cookie() {
        assert_eq!(read(&HeaderMap::new()), None);
        assert_eq!(read(&headers_with_cookie("theme=dark")), None);
    }

    #[test]
    fn test_read_ignores_cleared_cookie() {
        assert_eq!(read(&headers_with_cookie("flash=")), None);
    }

    #[test]
    fn test_clear_cookie_expires() {
        assert!(clear_cookie().contains("Max-Age=0"));
    }
}
