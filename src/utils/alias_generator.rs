//! Short alias generation and validation utilities.
//!
//! Random aliases are drawn uniformly from the 62 ASCII alphanumerics.
//! Custom aliases are accepted almost verbatim: the only rules are the ones
//! needed to keep `/<alias>` routable.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Character set for random aliases: `A-Z`, `a-z`, `0-9`.
const ALIAS_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of random aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Maximum length of any alias, random or custom.
pub const MAX_ALIAS_LENGTH: usize = 50;

/// Top-level route segments an alias must not shadow.
const RESERVED_ALIASES: &[&str] = &[
    "shorten",
    "stats",
    "dashboard",
    "category",
    "api",
    "static",
    "health",
];

/// Rejects path separators, query/fragment markers, escapes and whitespace.
static CUSTOM_ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^/?#%\s]+$").unwrap_or_else(|e| panic!("invalid alias regex: {e}"))
});

/// Generates a random alias of `length` characters.
///
/// Each character is picked independently and uniformly from
/// [`ALIAS_CHARSET`]. Collisions are not checked here; the caller rejects an
/// alias that is already stored.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALIAS_CHARSET.len());
            ALIAS_CHARSET[idx] as char
        })
        .collect()
}

/// Validates a user-provided custom alias.
///
/// # Rules
///
/// - Length: 1-50 characters
/// - No `/`, `?`, `#`, `%` or whitespace
/// - Cannot be a reserved top-level route segment
///
/// Case is preserved and significant; `Promo` and `promo` are distinct.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.chars().count() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(format!(
            "Custom alias must be 1-{MAX_ALIAS_LENGTH} characters"
        )));
    }

    if !CUSTOM_ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Custom alias cannot contain spaces or the characters / ? # %",
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(format!(
            "'{alias}' is reserved, choose another alias"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_alias_has_requested_length() {
        assert_eq!(generate_alias(6).len(), 6);
        assert_eq!(generate_alias(12).len(), 12);
    }

    #[test]
    fn test_generate_alias_alphanumeric_only() {
        for _ in 0..100 {
            let alias = generate_alias(DEFAULT_ALIAS_LENGTH);
            assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_alias_mostly_unique() {
        let aliases: HashSet<String> = (0..1000)
            .map(|_| generate_alias(DEFAULT_ALIAS_LENGTH))
            .collect();

        // 62^6 possibilities; a handful of collisions would still be suspicious
        assert!(aliases.len() >= 995);
    }

    #[test]
    fn test_generate_alias_uses_full_charset() {
        let sample: String = (0..200).map(|_| generate_alias(10)).collect();

        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_validate_simple_alias() {
        assert!(validate_custom_alias("promo").is_ok());
    }

    #[test]
    fn test_validate_mixed_case_and_symbols() {
        assert!(validate_custom_alias("My-Link_2024.v1").is_ok());
    }

    #[test]
    fn test_validate_single_character() {
        assert!(validate_custom_alias("x").is_ok());
    }

    #[test]
    fn test_validate_max_length() {
        let alias = "a".repeat(MAX_ALIAS_LENGTH);
        assert!(validate_custom_alias(&alias).is_ok());
    }

    #[test]
    fn test_validate_too_long() {
        let alias = "a".repeat(MAX_ALIAS_LENGTH + 1);
        let err = validate_custom_alias(&alias).unwrap_err();
        assert!(err.to_string().contains("1-50 characters"));
    }

    #[test]
    fn test_validate_empty() {
        assert!(validate_custom_alias("").is_err());
    }

    #[test]
    fn test_validate_rejects_slash() {
        assert!(validate_custom_alias("a/b").is_err());
    }

    #[test]
    fn test_validate_rejects_query_and_fragment() {
        assert!(validate_custom_alias("a?b").is_err());
        assert!(validate_custom_alias("a#b").is_err());
        assert!(validate_custom_alias("100%").is_err());
    }

    #[test]
    fn test_validate_rejects_whitespace() {
        let err = validate_custom_alias("my link").unwrap_err();
        assert!(err.to_string().contains("spaces"));
        assert!(validate_custom_alias("tab\there").is_err());
    }

    #[test]
    fn test_validate_all_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            assert!(
                validate_custom_alias(reserved).is_err(),
                "Reserved alias '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_reserved_check_is_case_sensitive() {
        assert!(validate_custom_alias("Dashboard").is_ok());
    }
}
