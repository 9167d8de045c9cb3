//! DTOs for the shortening and redirect endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::entities::UrlMapping;

/// Request to shorten a URL.
///
/// A missing, `null` or non-string `original_url` deserializes as an empty
/// string so that it is reported as `invalid url` rather than as a JSON schema
/// error.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub original_url: String,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Successful shortening result.
///
/// `short_url` carries the alias itself; clients build the full link from
/// `/api/shorturl/{short_url}`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
}

impl From<UrlMapping> for ShortenResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_original_url_defaults_to_empty() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.original_url, "");
    }

    #[test]
    fn test_non_string_original_url_defaults_to_empty() {
        for body in [
            r#"{"original_url": 42}"#,
            r#"{"original_url": null}"#,
            r#"{"original_url": ["https://example.com"]}"#,
            r#"{"original_url": {"href": "https://example.com"}}"#,
        ] {
            let request: ShortenRequest = serde_json::from_str(body).unwrap();
            assert_eq!(request.original_url, "", "body: {body}");
        }
    }

    #[test]
    fn test_string_original_url_is_kept_verbatim() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"original_url": "https://example.com/a b"}"#).unwrap();
        assert_eq!(request.original_url, "https://example.com/a b");
    }

    #[test]
    fn test_response_uses_short_url_field() {
        let response = ShortenResponse::from(UrlMapping::new(
            "https://www.freecodecamp.org",
            "Aa1Bb2",
        ));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["original_url"], "https://www.freecodecamp.org");
        assert_eq!(json["short_url"], "Aa1Bb2");
    }
}
