//! Public base URL resolution for building short URLs.

use axum::http::{HeaderMap, header};

/// Header set by reverse proxies to report the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resolves the base URL that short aliases are appended to.
///
/// A configured `BASE_URL` always wins. Otherwise the base is built from the
/// request: scheme from `X-Forwarded-Proto` (default `http`) and authority
/// from the `Host` header, port included. Without a usable `Host` header the
/// base falls back to `http://localhost/`.
///
/// The result always ends with `/`.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "go.example.com:8080".parse().unwrap());
///
/// assert_eq!(public_base_url(None, &headers), "http://go.example.com:8080/");
/// assert_eq!(public_base_url(Some("https://s.io"), &headers), "https://s.io/");
/// ```
pub fn public_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return with_trailing_slash(base);
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .unwrap_or("localhost");

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| s.eq_ignore_ascii_case("https") || s.eq_ignore_ascii_case("http"))
        .unwrap_or("http")
        .to_ascii_lowercase();

    format!("{scheme}://{host}/")
}

/// Joins a base URL and an alias into the full short URL.
pub fn short_url(base: &str, alias: &str) -> String {
    format!("{}{}", with_trailing_slash(base), alias)
}

fn with_trailing_slash(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}
