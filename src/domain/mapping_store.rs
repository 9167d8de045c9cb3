//! Atomic find-or-create over a [`MappingRepository`].
//!
//! # Protocol
//!
//! 1. Look up the original URL. A hit is returned unchanged, nothing is written.
//! 2. Otherwise mint a candidate code and `insert_if_absent`.
//! 3. If the original URL was inserted concurrently, the candidate is discarded and
//!    the winning mapping is returned. A winner that cannot be read back means the
//!    backend is inconsistent and is reported as a storage error.
//! 4. If the code is already taken, mint another and retry, up to `max_attempts`
//!    inserts. Running out is [`AppError::AliasCollisionExhausted`].
//!
//! Storage errors are propagated immediately and never retried.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;
use crate::utils::code_generator::AliasGenerator;

/// Default bound on insert attempts per find-or-create.
pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

/// Owner of the mapping collection and its uniqueness protocol.
pub struct MappingStore<R: MappingRepository + ?Sized, G: AliasGenerator + ?Sized> {
    repository: Arc<R>,
    generator: Arc<G>,
    max_attempts: usize,
}

impl<R: MappingRepository + ?Sized, G: AliasGenerator + ?Sized> MappingStore<R, G> {
    /// Creates a store with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(repository: Arc<R>, generator: Arc<G>) -> Self {
        Self::with_max_attempts(repository, generator, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a store with an explicit attempt bound (at least one).
    pub fn with_max_attempts(repository: Arc<R>, generator: Arc<G>, max_attempts: usize) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns the mapping for `original_url`, creating it if none exists.
    ///
    /// The URL must already be validated. Concurrent calls for the same URL all
    /// return the same mapping.
    ///
    /// # Errors
    ///
    /// - [`AppError::AliasCollisionExhausted`] if every attempt hit a taken code
    /// - [`AppError::StorageUnavailable`] on repository failures, or when a
    ///   concurrently stored mapping cannot be read back
    pub async fn find_or_create(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            debug!(short_code = %existing.short_code, "Reusing existing mapping");
            return Ok(existing);
        }

        for attempt in 1..=self.max_attempts {
            let candidate = UrlMapping::new(original_url, self.generator.generate());

            match self.repository.insert_if_absent(candidate).await? {
                InsertOutcome::Inserted(mapping) => {
                    metrics::counter!("mappings_created_total").increment(1);
                    info!(
                        short_code = %mapping.short_code,
                        attempt,
                        "Created mapping"
                    );
                    return Ok(mapping);
                }
                InsertOutcome::DuplicateOriginalUrl => {
                    metrics::counter!("shorten_races_total").increment(1);

                    if let Some(winner) =
                        self.repository.find_by_original_url(original_url).await?
                    {
                        debug!(
                            short_code = %winner.short_code,
                            "Lost insert race, returning concurrent mapping"
                        );
                        return Ok(winner);
                    }

                    error!("Original URL reported taken but not readable");
                    return Err(AppError::storage(
                        "original URL reported as stored but lookup found nothing",
                    ));
                }
                InsertOutcome::DuplicateShortCode => {
                    metrics::counter!("alias_collisions_total").increment(1);
                    warn!(attempt, "Short code collision, retrying");
                }
            }
        }

        error!(
            attempts = self.max_attempts,
            "Failed to allocate a unique short code"
        );

        Err(AppError::AliasCollisionExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Looks up a mapping by short code.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no mapping uses `short_code`
    /// - [`AppError::StorageUnavailable`] on repository failures
    pub async fn resolve(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(short_code))
    }

    /// Number of stored mappings.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.repository.count().await
    }
}
