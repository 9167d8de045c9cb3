//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::DynShortenerService;

/// State shared by all request handlers.
///
/// Built once at startup by [`crate::server::run`] and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<DynShortenerService>,
}

impl AppState {
    pub fn new(shortener: Arc<DynShortenerService>) -> Self {
        Self { shortener }
    }
}
