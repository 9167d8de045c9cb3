//! URL shortening and resolution service.

use std::sync::Arc;

use crate::domain::MappingStore;
use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::AliasGenerator;
use crate::utils::url_validator::validate_url;

/// Entry point for shortening and resolving URLs.
///
/// Validates input, then delegates to the [`MappingStore`]. Whether a mapping
/// already existed or was just created is not visible in the result.
pub struct ShortenerService<R: MappingRepository + ?Sized, G: AliasGenerator + ?Sized> {
    store: Arc<MappingStore<R, G>>,
}

/// Service over runtime-selected backends, as held in [`crate::state::AppState`].
pub type DynShortenerService = ShortenerService<dyn MappingRepository, dyn AliasGenerator>;

impl<R: MappingRepository + ?Sized, G: AliasGenerator + ?Sized> ShortenerService<R, G> {
    /// Creates a new shortener service.
    pub fn new(store: Arc<MappingStore<R, G>>) -> Self {
        Self { store }
    }

    /// Returns the mapping for `original_url`, creating one if needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL fails validation; nothing is
    /// written in that case.
    ///
    /// Returns [`AppError::AliasCollisionExhausted`] or
    /// [`AppError::StorageUnavailable`] from the store.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        validate_url(original_url).map_err(|e| AppError::invalid_url(e.to_string()))?;

        self.store.find_or_create(original_url).await
    }

    /// Resolves a short code to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for `short_code`.
    /// Returns [`AppError::StorageUnavailable`] on storage errors.
    pub async fn resolve(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.store.resolve(short_code).await
    }

    /// Number of stored mappings.
    pub async fn mapping_count(&self) -> Result<u64, AppError> {
        self.store.count().await
    }
}
