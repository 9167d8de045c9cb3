//! Classification of PostgreSQL unique-constraint violations.

/// Unique constraint on `url_mappings.original_url`.
pub const ORIGINAL_URL_CONSTRAINT: &str = "url_mappings_original_url_key";

/// Unique constraint on `url_mappings.short_url`.
pub const SHORT_URL_CONSTRAINT: &str = "url_mappings_short_url_key";

/// Which unique key an insert collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueViolation {
    OriginalUrl,
    ShortCode,
}

/// Maps a constraint name to the key it guards.
pub fn classify_constraint(constraint: Option<&str>) -> Option<UniqueViolation> {
    match constraint {
        Some(ORIGINAL_URL_CONSTRAINT) => Some(UniqueViolation::OriginalUrl),
        Some(SHORT_URL_CONSTRAINT) => Some(UniqueViolation::ShortCode),
        _ => None,
    }
}

/// Returns the violated key if `e` is a unique violation on `url_mappings`.
pub fn unique_violation(e: &sqlx::Error) -> Option<UniqueViolation> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    classify_constraint(db_err.constraint())
}
