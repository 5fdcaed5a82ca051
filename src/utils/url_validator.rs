//! Long URL validation.
//!
//! A long URL is accepted when it parses as an absolute URI. It is not
//! normalized: the caller stores the original string verbatim.

use url::Url;

/// Reasons a submitted long URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must not have leading or trailing whitespace")]
    SurroundingWhitespace,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` is a syntactically valid absolute URI.
///
/// # Rules
///
/// 1. Must not be empty
/// 2. Must not start or end with whitespace (the parser would silently trim it)
/// 3. Must carry a scheme, so relative references like `/path` or `not a url`
///    are rejected
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("https://example.com/a?b=c").is_ok());
/// assert!(validate_long_url("mailto:someone@example.com").is_ok());
/// assert!(validate_long_url("not a url").is_err());
/// ```
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.trim() != input {
        return Err(UrlValidationError::SurroundingWhitespace);
    }

    Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_long_url("http://example.com").is_ok());
        assert!(validate_long_url("https://example.com/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_accepts_other_absolute_uris() {
        assert!(validate_long_url("ftp://files.example.com/pub").is_ok());
        assert!(validate_long_url("mailto:someone@example.com").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            validate_long_url(""),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(matches!(
            validate_long_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_relative_reference() {
        assert!(validate_long_url("/just/a/path").is_err());
        assert!(validate_long_url("example.com/path").is_err());
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(matches!(
            validate_long_url(" https://example.com"),
            Err(UrlValidationError::SurroundingWhitespace)
        ));
        assert!(validate_long_url("https://example.com\n").is_err());
    }

    #[test]
    fn test_rejects_bad_host() {
        assert!(validate_long_url("http://exa mple.com").is_err());
        assert!(validate_long_url("https://").is_err());
    }
}
