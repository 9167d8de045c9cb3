//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;
use crate::utils::db_error::{UniqueViolation, unique_violation};

#[derive(sqlx::FromRow)]
struct MappingRow {
    original_url: String,
    short_url: String,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(row.original_url, row.short_url)
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Uniqueness of both keys is enforced by the table's unique constraints, so
/// concurrent inserts from any number of processes resolve to a single winner.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT original_url, short_url
            FROM url_mappings
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT original_url, short_url
            FROM url_mappings
            WHERE short_url = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (original_url, short_url)
            VALUES ($1, $2)
            RETURNING original_url, short_url
            "#,
        )
        .bind(&mapping.original_url)
        .bind(&mapping.short_code)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(InsertOutcome::Inserted(row.into())),
            Err(e) => match unique_violation(&e) {
                Some(UniqueViolation::OriginalUrl) => Ok(InsertOutcome::DuplicateOriginalUrl),
                Some(UniqueViolation::ShortCode) => Ok(InsertOutcome::DuplicateShortCode),
                None => Err(e.into()),
            },
        }
    }

    async fn count(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count.max(0) as u64)
    }
}
