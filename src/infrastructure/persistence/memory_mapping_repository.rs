//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Indexes {
    /// original_url -> short_code
    by_original_url: HashMap<String, String>,
    /// short_code -> original_url
    by_short_code: HashMap<String, String>,
}

/// Process-local repository, used when no database is configured and in tests.
///
/// Both indexes live behind one lock, so the uniqueness check and the dual insert
/// happen in a single critical section. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    indexes: RwLock<Indexes>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Indexes>, AppError> {
        self.indexes
            .read()
            .map_err(|_| AppError::storage("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Indexes>, AppError> {
        self.indexes
            .write()
            .map_err(|_| AppError::storage("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        let indexes = self.read()?;

        Ok(indexes
            .by_original_url
            .get(original_url)
            .map(|code| UrlMapping::new(original_url, code.as_str())))
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let indexes = self.read()?;

        Ok(indexes
            .by_short_code
            .get(short_code)
            .map(|url| UrlMapping::new(url.as_str(), short_code)))
    }

    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<InsertOutcome, AppError> {
        let mut indexes = self.write()?;

        if indexes.by_original_url.contains_key(&mapping.original_url) {
            return Ok(InsertOutcome::DuplicateOriginalUrl);
        }
        if indexes.by_short_code.contains_key(&mapping.short_code) {
            return Ok(InsertOutcome::DuplicateShortCode);
        }

        indexes
            .by_original_url
            .insert(mapping.original_url.clone(), mapping.short_code.clone());
        indexes
            .by_short_code
            .insert(mapping.short_code.clone(), mapping.original_url.clone());

        Ok(InsertOutcome::Inserted(mapping))
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.read()?.by_original_url.len() as u64)
    }
}
