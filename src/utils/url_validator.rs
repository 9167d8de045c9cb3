//! Syntactic validation of submitted URLs.
//!
//! A candidate is accepted only if it is an absolute URL with a recognized scheme,
//! an explicit `//` authority and a non-empty host. Accepted URLs are stored
//! exactly as received; nothing is normalized.

use url::Url;

/// Schemes a short link may point at.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Upper bound on accepted URL length in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a candidate URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL exceeds {MAX_URL_LENGTH} bytes")]
    TooLong,

    #[error("URL has leading or trailing whitespace")]
    SurroundingWhitespace,

    #[error("URL contains control characters")]
    ControlCharacters,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no authority component")]
    MissingAuthority,

    #[error("URL has no host")]
    MissingHost,
}

/// Validates a candidate URL, reporting why it was rejected.
///
/// # Errors
///
/// Returns a [`UrlValidationError`] describing the first rule that failed.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert_eq!(validate_url("not a url"), Err(UrlValidationError::InvalidFormat(..)));
/// assert_eq!(validate_url("http:example.com"), Err(UrlValidationError::MissingAuthority));
/// ```
pub fn validate_url(candidate: &str) -> Result<(), UrlValidationError> {
    if candidate.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if candidate.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    // `Url::parse` silently trims these, but the stored form must match the input.
    if candidate.trim() != candidate {
        return Err(UrlValidationError::SurroundingWhitespace);
    }

    // Stored URLs are sent back verbatim in the `Location` header.
    if candidate.bytes().any(|b| b.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacters);
    }

    let url =
        Url::parse(candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    let scheme = url.scheme();
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return Err(UrlValidationError::UnsupportedScheme(scheme.to_string()));
    }

    // The parser repairs `http:example.com` into `http://example.com/`.
    let has_authority = candidate
        .get(scheme.len() + 1..)
        .is_some_and(|rest| rest.starts_with("//"));
    if !has_authority {
        return Err(UrlValidationError::MissingAuthority);
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// Returns true if `candidate` is a well-formed absolute URL.
pub fn is_valid(candidate: &str) -> bool {
    validate_url(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_https() {
        assert!(is_valid("https://www.freecodecamp.org"));
    }

    #[test]
    fn test_accepts_path_and_query() {
        assert!(is_valid("https://example.com/path?q=1"));
    }

    #[test]
    fn test_accepts_http_with_port_and_fragment() {
        assert!(is_valid("http://localhost:8080/a/b#section"));
    }

    #[test]
    fn test_accepts_ftp() {
        assert!(is_valid("ftp://files.example.com/pub/file.txt"));
    }

    #[test]
    fn test_accepts_ip_host() {
        assert!(is_valid("http://127.0.0.1/"));
        assert!(is_valid("http://[::1]:3000/"));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(matches!(
            validate_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_relative_paths() {
        assert!(!is_valid("/relative/path"));
        assert!(!is_valid("relative/path"));
        assert!(!is_valid("example.com"));
    }

    #[test]
    fn test_rejects_malformed_schemes() {
        assert!(!is_valid("htp//example.com"));
        assert!(!is_valid("://example.com"));
        assert!(!is_valid("1http://example.com"));
    }

    #[test]
    fn test_rejects_missing_authority() {
        assert_eq!(
            validate_url("http:example.com"),
            Err(UrlValidationError::MissingAuthority)
        );
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(!is_valid("http://"));
        assert!(!is_valid("file:///etc/passwd"));
    }

    #[test]
    fn test_rejects_unsupported_schemes() {
        assert_eq!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedScheme("javascript".to_string()))
        );
        assert!(!is_valid("mailto:user@example.com"));
        assert!(!is_valid("data:text/plain,hello"));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert_eq!(
            validate_url(" https://example.com"),
            Err(UrlValidationError::SurroundingWhitespace)
        );
        assert_eq!(
            validate_url("https://example.com\n"),
            Err(UrlValidationError::SurroundingWhitespace)
        );
    }

    #[test]
    fn test_rejects_embedded_control_characters() {
        assert_eq!(
            validate_url("https://example.com/a\tb"),
            Err(UrlValidationError::ControlCharacters)
        );
        assert_eq!(
            validate_url("\u{1}https://example.com"),
            Err(UrlValidationError::ControlCharacters)
        );
    }

    #[test]
    fn test_accepts_non_ascii_path() {
        assert!(is_valid("https://example.com/caf\u{e9}"));
    }

    #[test]
    fn test_rejects_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(validate_url(&url), Err(UrlValidationError::TooLong));
    }

    #[test]
    fn test_uppercase_scheme_is_accepted() {
        assert!(is_valid("HTTPS://EXAMPLE.COM/Path"));
    }
}
