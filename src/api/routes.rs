//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`               - Shorten a URL (idempotent per URL)
/// - `GET  /shorturl/{short_url}`   - Redirect to the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
