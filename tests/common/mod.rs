#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use url_shortener::application::services::{DynShortenerService, ShortenerService};
use url_shortener::domain::MappingStore;
use url_shortener::domain::entities::UrlMapping;
use url_shortener::domain::repositories::{InsertOutcome, MappingRepository};
use url_shortener::error::AppError;
use url_shortener::infrastructure::persistence::InMemoryMappingRepository;
use url_shortener::state::AppState;
use url_shortener::utils::code_generator::{AliasGenerator, RandomAliasGenerator};

/// Yields the given codes in order, then random ones.
pub struct ScriptedAliasGenerator {
    codes: Mutex<VecDeque<String>>,
    fallback: RandomAliasGenerator,
}

impl ScriptedAliasGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            fallback: RandomAliasGenerator::default(),
        }
    }
}

impl AliasGenerator for ScriptedAliasGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.generate())
    }
}

/// Repository whose every call fails like an unreachable database.
pub struct UnavailableRepository;

#[async_trait]
impl MappingRepository for UnavailableRepository {
    async fn find_by_original_url(&self, _: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn find_by_short_code(&self, _: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn insert_if_absent(&self, _: UrlMapping) -> Result<InsertOutcome, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn count(&self) -> Result<u64, AppError> {
        Err(AppError::storage("connection refused"))
    }
}

pub fn create_service(
    repository: Arc<dyn MappingRepository>,
    generator: Arc<dyn AliasGenerator>,
    max_attempts: usize,
) -> Arc<DynShortenerService> {
    let store = MappingStore::with_max_attempts(repository, generator, max_attempts);
    Arc::new(ShortenerService::new(Arc::new(store)))
}

pub fn create_test_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    create_test_state_with_codes(&[])
}

pub fn create_test_state_with_codes(
    codes: &[&str],
) -> (AppState, Arc<InMemoryMappingRepository>) {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let service = create_service(
        repo.clone(),
        Arc::new(ScriptedAliasGenerator::new(codes)),
        8,
    );

    (AppState::new(service), repo)
}

pub fn create_unavailable_state() -> AppState {
    let service = create_service(
        Arc::new(UnavailableRepository),
        Arc::new(RandomAliasGenerator::default()),
        8,
    );

    AppState::new(service)
}

pub async fn create_test_mapping(repo: &InMemoryMappingRepository, url: &str, code: &str) {
    let outcome = repo
        .insert_if_absent(UrlMapping::new(url, code))
        .await
        .unwrap();
    assert!(matches!(outcome, InsertOutcome::Inserted(_)));
}
