//! Repository trait for URL mapping persistence.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an atomic insert attempt.
///
/// Uniqueness of both keys is decided by the backend inside the insert itself;
/// callers never check-then-insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The mapping was stored as given.
    Inserted(UrlMapping),
    /// Another mapping already owns this original URL. Nothing was written.
    DuplicateOriginalUrl,
    /// Another mapping already owns this short code. Nothing was written.
    DuplicateShortCode,
}

/// Persistence backend for URL mappings.
///
/// Implementations must enforce uniqueness of `original_url` and `short_code`
/// atomically within [`MappingRepository::insert_if_absent`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds a mapping by its exact original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backend errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backend errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Inserts the mapping unless either key is already taken.
    ///
    /// A uniqueness conflict is reported through [`InsertOutcome`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backend errors.
    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<InsertOutcome, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backend errors.
    async fn count(&self) -> Result<u64, AppError>;
}
