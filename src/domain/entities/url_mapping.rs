//! URL mapping entity: the pairing of an original URL and its alias.

/// A stored mapping between an original URL and its short code.
///
/// Mappings are immutable once persisted: neither field is ever rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_code: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
        }
    }
}
